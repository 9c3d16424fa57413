pub(crate) mod deal;
