//! Landing page: games showcase and latest articles.

use super::Site;
use crate::document::{DisplayMode, Document};
use crate::record::{Blog, Game};
use crate::render::{render_blog_preview, render_games_showcase};
use crate::scheduler::Scheduler;
use crate::storage::KeyValueStore;

pub const GAMES_TRACK_MOUNT: &str = "gamesTrack";
pub const GAMES_EMPTY_MOUNT: &str = "gamesShowcaseEmpty";
pub const BLOGS_MOUNT: &str = "indexBlogs";

pub struct IndexPage<'a, S, D, Sch> {
    site: &'a Site<S, D, Sch>,
}

impl<'a, S, D, Sch> IndexPage<'a, S, D, Sch>
where
    S: KeyValueStore,
    D: Document + Clone + 'static,
    Sch: Scheduler,
{
    pub(crate) fn new(site: &'a Site<S, D, Sch>) -> Self {
        Self { site }
    }

    pub fn init(&self) {
        self.render_games_showcase();
        self.render_blogs_preview();
    }

    /// The newest games as showcase items. An empty collection clears the
    /// track and reveals the empty-state element instead.
    pub fn render_games_showcase(&self) {
        let document = &self.site.document;
        if !document.contains(GAMES_TRACK_MOUNT) {
            return;
        }

        let games = self
            .site
            .collection::<Game>()
            .preview(self.site.config.showcase_limit);
        if games.is_empty() {
            document.set_inner_html(GAMES_TRACK_MOUNT, "");
            document.set_display(GAMES_EMPTY_MOUNT, DisplayMode::Flex);
            return;
        }

        document.set_display(GAMES_EMPTY_MOUNT, DisplayMode::None);
        document.set_inner_html(GAMES_TRACK_MOUNT, &render_games_showcase(&games));
        self.site.notify_showcase_rendered(games.len());
    }

    /// The newest articles, without delete buttons.
    pub fn render_blogs_preview(&self) {
        let document = &self.site.document;
        if !document.contains(BLOGS_MOUNT) {
            return;
        }

        let blogs = self
            .site
            .collection::<Blog>()
            .preview(self.site.config.blog_preview_limit);
        document.set_inner_html(BLOGS_MOUNT, &render_blog_preview(&blogs, &self.site.locale));
    }
}
