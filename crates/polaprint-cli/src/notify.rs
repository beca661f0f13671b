use console::Style;
use tracing::error;

/// Report a failed user action. Printed once, no retry.
pub fn alert(err: &anyhow::Error) {
    error!("{err:#}");
    eprintln!("{}", format_alert(err));
}

/// The alert text: the error in bold red, then each cause dimmed.
fn format_alert(err: &anyhow::Error) -> String {
    let style = Style::new().red().bold();
    let mut text = format!("\n  {} {}\n", style.apply_to("!"), style.apply_to(err));
    for cause in err.chain().skip(1) {
        text.push_str(&format!("    {}\n", Style::new().dim().apply_to(cause)));
    }
    text
}
