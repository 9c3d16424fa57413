use crate::config::DealsConfig;
use crate::constants::{DEALS_STATUS_HEADER, TEXT_HTML};
use crate::entities::deal::Deal;
use crate::pages::templates::{DealsPage, NoDealsPage};
use crate::sheet_interface::deal_rows::REQUIRED_COLUMNS;
use crate::sheet_interface::sheet_client::SheetClient;
use actix_web::web::ThinData;
use actix_web::{get, HttpResponse};
use log::debug;

#[get("/")]
pub async fn deals_page(sheet_client: ThinData<SheetClient>,
                        config: ThinData<DealsConfig>,
) -> HttpResponse {
    let fetched = sheet_client.fetch_deals(config.sheet_url.as_str()).await;
    debug!("Rendering {} deals, fetch {}", fetched.deals.len(), fetched.status.as_str());

    HttpResponse::Ok()
        .content_type(TEXT_HTML)
        .insert_header((DEALS_STATUS_HEADER, fetched.status.as_str()))
        .body(render_page(&fetched.deals))
}

pub fn render_page(deals: &[Deal]) -> String {
    if deals.is_empty() {
        return render_no_deals();
    }
    let template = DealsPage {
        count: deals.len(),
        deals: deals.iter().map(Deal::to_deal_view).collect(),
    };
    template.to_string()
}

fn render_no_deals() -> String {
    let columns = REQUIRED_COLUMNS.join(", ");
    let template = NoDealsPage {
        columns: columns.as_str(),
    };
    template.to_string()
}
