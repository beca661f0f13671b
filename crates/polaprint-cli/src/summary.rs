use std::path::Path;

use console::Style;
use polaprint_core::code::CodeCell;
use polaprint_core::export::ResizedOutput;
use polaprint_core::resize::ResampleFilter;
use polaprint_core::session::Session;
use polaprint_core::units::Unit;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    digit: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            digit: Style::new().bold().underlined(),
        }
    }
}

/// Print the code as six underlined cells.
pub fn print_code<I>(cells: I)
where
    I: IntoIterator<Item = CodeCell>,
{
    let s = Styles::new();
    let mut line = String::from("  ");
    for cell in cells {
        line.push_str(&s.digit.apply_to(format!(" {cell} ")).to_string());
        if !cell.is_last() {
            line.push_str("  ");
        }
    }
    println!();
    println!("{line}");
    println!();
}

pub fn print_lookup(code: &str, url: &str) {
    let s = Styles::new();
    println!("  {:<14}{}", s.label.apply_to("Code"), s.value.apply_to(code));
    println!("  {:<14}{}", s.label.apply_to("Origin image"), s.path.apply_to(url));
}

pub fn print_resize_summary(session: &Session, filter: ResampleFilter) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Resize"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    if let Some(src) = session.source_image() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.value.apply_to(format!("{}x{} px", src.width(), src.height()))
        );
    }

    println!("  {}", s.header.apply_to("Target"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{} x {} {}",
            session.width(),
            session.height(),
            session.unit()
        ))
    );
    if session.unit() == Unit::Inches {
        println!(
            "    {:<12}{}",
            s.label.apply_to("DPI"),
            s.value.apply_to(session.dpi())
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("DPI"),
            s.disabled.apply_to(format!("{} (filename only)", session.dpi()))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Format"),
        s.method.apply_to(session.mode())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Filter"),
        s.method.apply_to(filter)
    );
    println!();
}

pub fn print_output(output: &ResizedOutput, saved: &Path) {
    let s = Styles::new();
    let size = output.size();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rendered"),
        s.value.apply_to(format!("{} {} px", output.mode(), size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved"),
        s.path.apply_to(saved.display())
    );
}
