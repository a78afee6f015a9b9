use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::form::FieldReader;
use super::{card_image, non_empty, Entry, FormData, Messages, Mounts, Resource, ResourceKind};
use crate::error::ValidationError;
use crate::render::{delete_button, escape_html, Locale};

/// Product price in rupiah. Always finite and non-negative.
///
/// Older payloads stored the raw form string, so a numeric string is
/// accepted when reading; it is always written back as a number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Option<Self> {
        (amount.is_finite() && amount >= 0.0).then_some(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Price::new)
            .ok_or_else(|| ValidationError::InvalidPrice(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(amount) => {
                Price::new(amount).ok_or_else(|| de::Error::custom("price out of range"))
            }
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// A store product linking out to a marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    pub marketplace: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Resource for Product {
    const KIND: ResourceKind = ResourceKind {
        collection: "products",
        unit: "produk",
        placeholder_icon: "🛒",
        delete_handler: "handleDeleteProduct",
        mounts: Mounts {
            list: "allProducts",
            count: "storeCount",
            form: "addProductForm",
            modal: "storeModal",
        },
        messages: Messages {
            empty: "Belum ada produk. Klik tombol di atas untuk menambahkan!",
            invalid: "Harap isi nama, harga, dan link marketplace!",
            added: "✅ Produk berhasil ditambahkan!",
            deleted: "🗑 Produk dihapus.",
            confirm_delete: "Hapus produk ini?",
        },
    };

    fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(form);
        let name = fields.required("productName");
        let price = fields.required("productPrice");
        let marketplace = fields.required("productMarketplace");
        let category = fields.optional("productCategory");
        let desc = fields.optional("productDesc");
        let image = fields.optional("productImage");
        fields.finish()?;

        Ok(Product {
            name,
            price: price.parse()?,
            marketplace,
            category,
            desc,
            image,
        })
    }

    fn render_card(entry: &Entry<Self>, show_delete: bool, locale: &Locale) -> String {
        let product = &entry.fields;
        let image = card_image(
            product.image.as_deref(),
            &product.name,
            "this.style.display='none';this.nextElementSibling.style.display='flex'",
        );
        let placeholder = format!(
            r#"<div class="store-card-placeholder"{}>{}</div>"#,
            if image.is_some() { r#" style="display:none""# } else { "" },
            Self::KIND.placeholder_icon
        );
        let category = product
            .category
            .as_deref()
            .map(|c| format!(r#"<span class="yl-genre-tag">{}</span>"#, escape_html(c)))
            .unwrap_or_default();
        let desc = product
            .desc
            .as_deref()
            .map(|d| format!(r#"<p class="store-card-desc">{}</p>"#, escape_html(d)))
            .unwrap_or_default();

        format!(
            r#"<div class="store-card" data-id="{id}"><div class="store-card-image">{image}{placeholder}</div><div class="store-card-body">{category}<h3 class="store-card-name">{name}</h3>{desc}<div class="store-card-price">{price}</div><div class="store-card-actions"><a href="{link}" target="_blank" rel="noopener" class="store-order-btn">🛍 Pesan Sekarang</a>{delete}</div></div></div>"#,
            id = entry.id,
            image = image.unwrap_or_default(),
            placeholder = placeholder,
            category = category,
            name = escape_html(&product.name),
            desc = desc,
            price = locale.format_price(product.price.amount()),
            link = escape_html(&product.marketplace),
            delete = delete_button(Self::KIND.delete_handler, entry.id, show_delete),
        )
    }
}
