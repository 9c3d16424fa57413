use crate::pages::deal_view::DealView;
use yarte::Template;

#[derive(Template)]
#[template(path = "pages/deals")]
pub struct DealsPage {
    pub count: usize,
    pub deals: Vec<DealView>,
}

#[derive(Template)]
#[template(path = "pages/no_deals")]
pub struct NoDealsPage<'a> {
    pub columns: &'a str,
}
