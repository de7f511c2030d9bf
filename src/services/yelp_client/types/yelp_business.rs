use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub is_claimed: bool,
    pub is_closed: bool,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub mobile_url: Option<String>,
    pub phone: Option<String>,
    pub display_phone: Option<String>,
    pub review_count: u32,
    /// `[display name, alias]` pairs, e.g. `["Local Flavor", "localflavor"]`.
    pub categories: Vec<Vec<String>>,
    /// Meters from the search location, only present on search results.
    pub distance: Option<f64>,
    pub rating: f64,
    pub rating_img_url: Option<String>,
    pub rating_img_url_small: Option<String>,
    pub rating_img_url_large: Option<String>,
    pub snippet_text: Option<String>,
    pub snippet_image_url: Option<String>,
    pub location: BusinessLocation,
    pub deals: Vec<Deal>,
    pub gift_certificates: Vec<GiftCertificate>,
    pub menu_provider: Option<String>,
    pub menu_date_updated: Option<i64>,
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BusinessLocation {
    pub address: Vec<String>,
    pub display_address: Vec<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub cross_streets: Option<String>,
    pub neighborhoods: Vec<String>,
    pub coordinate: Option<Coordinate>,
    pub geo_accuracy: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Deal {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub currency_code: Option<String>,
    pub time_start: Option<i64>,
    pub time_end: Option<i64>,
    pub is_popular: Option<bool>,
    pub what_you_get: Option<String>,
    pub important_restrictions: Option<String>,
    pub additional_restrictions: Option<String>,
    pub options: Vec<DealOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DealOption {
    pub title: Option<String>,
    pub purchase_url: Option<String>,
    /// Cents.
    pub price: Option<i64>,
    pub formatted_price: Option<String>,
    pub original_price: Option<i64>,
    pub formatted_original_price: Option<String>,
    pub is_quantity_limited: Option<bool>,
    pub remaining_count: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GiftCertificate {
    pub id: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub currency_code: Option<String>,
    pub unused_balances: Option<String>,
    pub options: Vec<GiftCertificateOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GiftCertificateOption {
    pub price: Option<i64>,
    pub formatted_price: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Review {
    pub id: Option<String>,
    pub rating: Option<f64>,
    pub rating_image_url: Option<String>,
    pub rating_image_small_url: Option<String>,
    pub rating_image_large_url: Option<String>,
    pub excerpt: Option<String>,
    pub time_created: Option<i64>,
    pub user: Option<ReviewUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReviewUser {
    pub id: Option<String>,
    pub image_url: Option<String>,
    pub name: Option<String>,
}
