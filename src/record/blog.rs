use serde::{Deserialize, Serialize};

use super::form::FieldReader;
use super::{card_image, non_empty, Entry, FormData, Messages, Mounts, Resource, ResourceKind};
use crate::error::ValidationError;
use crate::render::{delete_button, escape_html, Locale};

/// A blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Resource for Blog {
    const KIND: ResourceKind = ResourceKind {
        collection: "blogs",
        unit: "artikel",
        placeholder_icon: "📝",
        delete_handler: "handleDeleteBlog",
        mounts: Mounts {
            list: "allBlogs",
            count: "blogCount",
            form: "addBlogForm",
            modal: "blogModal",
        },
        messages: Messages {
            empty: "Belum ada artikel. Klik tombol di atas untuk menambahkan!",
            invalid: "Harap isi semua field wajib!",
            added: "✅ Artikel berhasil ditambahkan!",
            deleted: "🗑 Artikel dihapus.",
            confirm_delete: "Hapus artikel ini?",
        },
    };

    fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut fields = FieldReader::new(form);
        let blog = Blog {
            title: fields.required("blogTitle"),
            content: fields.required("blogContent"),
            image: fields.optional("blogImage"),
        };
        fields.finish()?;
        Ok(blog)
    }

    fn render_card(entry: &Entry<Self>, show_delete: bool, locale: &Locale) -> String {
        let blog = &entry.fields;
        let image = card_image(blog.image.as_deref(), &blog.title, "this.style.display='none'")
            .unwrap_or_else(|| {
                format!(
                    r#"<div class="yl-card-placeholder">{}</div>"#,
                    Self::KIND.placeholder_icon
                )
            });

        format!(
            r#"<div class="blog-preview-card" data-id="{id}" style="cursor:default;"><div class="blog-preview-image">{image}</div><div class="blog-preview-content"><div class="yl-date-tag">{date}</div><h3>{title}</h3><p>{content}</p>{delete}</div></div>"#,
            id = entry.id,
            image = image,
            date = locale.format_date(&entry.created_at),
            title = escape_html(&blog.title),
            content = escape_html(&blog.content),
            delete = delete_button(Self::KIND.delete_handler, entry.id, show_delete),
        )
    }
}
