use serde::{Deserialize, Serialize};

use super::form::FieldReader;
use super::{card_image, non_empty, Entry, FormData, Messages, Mounts, Resource, ResourceKind};
use crate::error::ValidationError;
use crate::render::{delete_button, escape_html, Locale};

/// A game listed on the games page and the landing-page showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub genre: String,
    pub synopsis: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Resource for Game {
    const KIND: ResourceKind = ResourceKind {
        collection: "games",
        unit: "game",
        placeholder_icon: "🎮",
        delete_handler: "handleDeleteGame",
        mounts: Mounts {
            list: "allGames",
            count: "gameCount",
            form: "addGameForm",
            modal: "gameModal",
        },
        messages: Messages {
            empty: "Belum ada game. Klik tombol di atas untuk menambahkan!",
            invalid: "Harap isi semua field wajib!",
            added: "✅ Game berhasil ditambahkan!",
            deleted: "🗑 Game dihapus.",
            confirm_delete: "Hapus game ini?",
        },
    };

    fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(form);
        let game = Game {
            title: fields.required("gameTitle"),
            genre: fields.required("gameGenre"),
            synopsis: fields.required("gameSynopsis"),
            image: fields.optional("gameImage"),
        };
        fields.finish()?;
        Ok(game)
    }

    fn render_card(entry: &Entry<Self>, show_delete: bool, _locale: &Locale) -> String {
        let game = &entry.fields;
        let image = card_image(game.image.as_deref(), &game.title, "this.style.display='none'")
            .unwrap_or_else(|| {
                format!(
                    r#"<div class="yl-card-placeholder">{}</div>"#,
                    Self::KIND.placeholder_icon
                )
            });

        format!(
            r#"<div class="blog-preview-card" data-id="{id}" style="cursor:default;"><div class="blog-preview-image">{image}</div><div class="blog-preview-content"><span class="yl-genre-tag">{genre}</span><h3>{title}</h3><p>{synopsis}</p>{delete}</div></div>"#,
            id = entry.id,
            image = image,
            genre = escape_html(&game.genre),
            title = escape_html(&game.title),
            synopsis = escape_html(&game.synopsis),
            delete = delete_button(Self::KIND.delete_handler, entry.id, show_delete),
        )
    }
}
