/// One row of the deals sheet, with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub title: String,
    pub store: String,
    pub current_price: f64,
    pub original_price: f64,
    pub deal_url: String,
}
