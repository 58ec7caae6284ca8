//! Display formatting for the presentation boundary.
//!
//! Both the GUI table and the console report render fields through these
//! helpers so the two front ends agree on the exact strings.

/// Rating to one decimal place.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Sales in millions of units, e.g. "40.2M".
pub fn format_sales(sales_millions: f64) -> String {
    format!("{:.1}M", sales_millions)
}

/// Playtime in whole hours, e.g. "100h".
pub fn format_playtime(playtime_hours: u32) -> String {
    format!("{}h", playtime_hours)
}

/// Price in dollars, e.g. "$39.99".
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Turn a snake_case stat key into a console label: underscores become
/// spaces and each word is title-cased ("avg_rating" -> "Avg Rating").
pub fn stat_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_formatting() {
        assert_eq!(format_rating(9.8), "9.8");
        assert_eq!(format_rating(7.0), "7.0");
        assert_eq!(format_sales(40.2), "40.2M");
        assert_eq!(format_sales(170.0), "170.0M");
        assert_eq!(format_playtime(100), "100h");
        assert_eq!(format_price(39.99), "$39.99");
        assert_eq!(format_price(30.0), "$30.00");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("total_games"), "Total Games");
        assert_eq!(stat_label("avg_rating"), "Avg Rating");
        assert_eq!(stat_label("playtime"), "Playtime");
    }
}
