use crate::constants::NO_DEAL_URL;
use crate::entities::deal::Deal;
use url::Url;

const DISCOUNT_CLASS: &str = "discount";
const INCREASE_CLASS: &str = "discount increase";

/// A deal with every value already formatted for the listing template.
#[derive(Debug, Clone, PartialEq)]
pub struct DealView {
    pub title: String,
    pub store: String,
    pub current_price: String,
    pub original_price: String,
    pub badge: String,
    pub badge_class: &'static str,
    pub deal_url: String,
}

impl Deal {
    pub fn to_deal_view(&self) -> DealView {
        let discount = discount_percent(self.current_price, self.original_price);
        DealView {
            title: self.title.clone(),
            store: self.store.clone(),
            current_price: format_price(self.current_price),
            original_price: format_price(self.original_price),
            badge: discount_badge(discount),
            badge_class: if discount < 0 { INCREASE_CLASS } else { DISCOUNT_CLASS },
            deal_url: safe_link(&self.deal_url),
        }
    }
}

/// Percentage off the original price, rounded half away from zero.
/// A zero or negative original price has no meaningful discount and reports 0.
pub fn discount_percent(current_price: f64, original_price: f64) -> i64 {
    if original_price <= 0.0 {
        return 0;
    }
    (((original_price - current_price) / original_price) * 100.0).round() as i64
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

pub fn discount_badge(discount: i64) -> String {
    match discount {
        d if d < 0 => format!("{}% MORE", -d),
        d => format!("{}% OFF", d),
    }
}

/// Keeps http(s) and relative links; anything with another scheme becomes `#`.
pub fn safe_link(deal_url: &str) -> String {
    match Url::parse(deal_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => deal_url.to_string(),
        Ok(_) => NO_DEAL_URL.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => deal_url.to_string(),
        Err(_) => NO_DEAL_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::deal::Deal;
    use crate::pages::deal_view::{discount_badge, discount_percent, format_price, safe_link};

    fn deal(current_price: f64, original_price: f64) -> Deal {
        Deal {
            title: "Widget".to_string(),
            store: "ShopX".to_string(),
            current_price,
            original_price,
            deal_url: "http://x/y".to_string(),
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(80.0, 100.0), 20);
        assert_eq!(discount_percent(75.0, 100.0), 25);
        assert_eq!(discount_percent(19.99, 29.99), 33);
        assert_eq!(discount_percent(0.0, 49.99), 100);
        assert_eq!(discount_percent(10.0, 10.0), 0);
    }

    #[test]
    fn test_discount_percent_rounds_half_away_from_zero() {
        assert_eq!(discount_percent(87.5, 100.0), 13);
        assert_eq!(discount_percent(112.5, 100.0), -13);
    }

    #[test]
    fn test_discount_percent_without_original_price_is_zero() {
        assert_eq!(discount_percent(10.0, 0.0), 0);
        assert_eq!(discount_percent(0.0, 0.0), 0);
        assert_eq!(discount_percent(5.0, -1.0), 0);
    }

    #[test]
    fn test_price_increase_is_a_negative_discount() {
        assert_eq!(discount_percent(120.0, 100.0), -20);
        assert_eq!(discount_badge(-20), "20% MORE");
        assert_eq!(discount_badge(20), "20% OFF");
        assert_eq!(discount_badge(0), "0% OFF");
    }

    #[test]
    fn test_format_price_has_two_decimals() {
        assert_eq!(format_price(75.0), "75.00");
        assert_eq!(format_price(19.999), "20.00");
        assert_eq!(format_price(0.5), "0.50");
    }

    #[test]
    fn test_safe_link() {
        assert_eq!(safe_link("https://shop.example/item?id=3"), "https://shop.example/item?id=3");
        assert_eq!(safe_link("http://x/y"), "http://x/y");
        assert_eq!(safe_link("#"), "#");
        assert_eq!(safe_link("/deals/7"), "/deals/7");
        assert_eq!(safe_link("javascript:alert(1)"), "#");
        assert_eq!(safe_link("data:text/html,<b>hi</b>"), "#");
    }

    #[test]
    fn test_to_deal_view() {
        let view = deal(75.0, 100.0).to_deal_view();
        assert_eq!(view.current_price, "75.00");
        assert_eq!(view.original_price, "100.00");
        assert_eq!(view.badge, "25% OFF");
        assert_eq!(view.badge_class, "discount");

        let view = deal(12.0, 10.0).to_deal_view();
        assert_eq!(view.badge, "20% MORE");
        assert_eq!(view.badge_class, "discount increase");

        let view = deal(5.0, 0.0).to_deal_view();
        assert_eq!(view.badge, "0% OFF");
    }
}
