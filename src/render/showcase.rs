//! Landing-page previews.

use super::{empty_state, escape_html, Locale};
use crate::record::{card_image, Blog, Entry, Game, Resource};

/// Shown in the blog preview when there are no articles yet.
pub const BLOG_PREVIEW_EMPTY: &str = "Belum ada artikel. Tambahkan melalui halaman Blog!";

/// Showcase items for the games track. The first item is the active one.
pub fn render_games_showcase(games: &[Entry<Game>]) -> String {
    games
        .iter()
        .enumerate()
        .map(|(i, entry)| showcase_item(i, &entry.fields))
        .collect()
}

fn showcase_item(index: usize, game: &Game) -> String {
    let image = card_image(
        game.image.as_deref(),
        &game.title,
        "this.style.display='none';this.nextElementSibling.style.display='flex'",
    );
    let placeholder = format!(
        r#"<div class="game-showcase-placeholder"{}>{}</div>"#,
        if image.is_some() { r#" style="display:none""# } else { "" },
        Game::KIND.placeholder_icon
    );

    format!(
        r#"<div class="game-showcase-item{active}" data-index="{index}"><div class="game-showcase-img-wrap">{image}{placeholder}</div><div class="game-showcase-info"><span class="yl-genre-tag">{genre}</span><h3>{title}</h3><p>{synopsis}</p></div></div>"#,
        active = if index == 0 { " active-game" } else { "" },
        index = index,
        image = image.unwrap_or_default(),
        placeholder = placeholder,
        genre = escape_html(&game.genre),
        title = escape_html(&game.title),
        synopsis = escape_html(&game.synopsis),
    )
}

/// Blog cards without delete buttons, or a call to action when empty.
pub fn render_blog_preview(blogs: &[Entry<Blog>], locale: &Locale) -> String {
    if blogs.is_empty() {
        return empty_state(Blog::KIND.placeholder_icon, BLOG_PREVIEW_EMPTY);
    }
    blogs
        .iter()
        .map(|entry| Blog::render_card(entry, false, locale))
        .collect()
}
