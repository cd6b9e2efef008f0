use pargraph::colors::ColorScheme;
use colored::Colorize;
use pargraph::display::format_path_flow;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    assert!(colors.node("42").to_string().contains("42"));
    assert!(colors.arrow("→").to_string().contains("→"));
    assert!(colors.success("Success").to_string().contains("Success"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.node("42").to_string(), "42");
    assert_eq!(colors.error("Error").to_string(), "Error");
    assert_eq!(format_path_flow(&[1, 3, 4], &colors), "1 → 3 → 4");
    assert_eq!(format_path_flow(&[7], &colors), "7");
}

#[test]
fn test_arrow_is_dimmed() {
    let colors = ColorScheme::new(true);

    assert_eq!(colors.arrow("→"), "→".bright_black());
    assert_ne!(colors.arrow("→"), "→".normal());
}
