pub(crate) mod sheet_client;
pub(crate) mod sheet_error;
pub(crate) mod sheet_reference;
pub(crate) mod deal_rows;
