// src/config/consts.rs

// Feed
pub const SPREADSHEET_ID: &str = "1rTv1YmAD-AQBgYYsOjOO2LxVkiHrpHrfjFRmBz5brZc";
pub const FEED_URL_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";
pub const FEED_URL_SUFFIX: &str = "/gviz/tq?tqx=out:json";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "archive_catalog/0.4";

// Feed columns
pub const COL_KEY: &str = "A";
pub const COL_ARTIST: &str = "B";
pub const COL_TITLE: &str = "C";
pub const COL_PRICE: &str = "D";
pub const COL_STOCK: &str = "G";
pub const COL_NOTE: &str = "H";

// Catalog list
pub const PAGE_SIZE: usize = 20;
pub const PROXIMITY_PX: f32 = 100.0;

// Images
pub const IMAGE_DIR: &str = "images";
pub const PRODUCT_IMAGE_EXT: &str = ".jpeg";

// UI text
pub const TXT_LOADING: &str = "Загрузка...";
pub const TXT_SEARCH_HINT: &str = "Поиск";
pub const TXT_NOTHING_FOUND: &str = "Ничего не найдено";
pub const TXT_IMAGE_LOADING: &str = "loading";
pub const TXT_PRICE_PREFIX: &str = "Цена: ";
pub const TXT_CURRENCY: &str = " ₽";
