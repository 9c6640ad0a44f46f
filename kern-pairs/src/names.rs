//! Naming glyphs

use std::borrow::Cow;

use read_fonts::{tables::post::Post, types::GlyphId16, FontRef, TableProvider};

/// Maps glyph ids to names, using the `post` table.
pub struct GlyphNames<'a> {
    post: Option<Post<'a>>,
}

impl<'a> GlyphNames<'a> {
    pub fn new(font: &FontRef<'a>) -> Self {
        let post = match font.post() {
            Ok(post) => Some(post),
            Err(err) => {
                log::info!("no glyph names available ('{err}'), using glyph ids");
                None
            }
        };
        GlyphNames { post }
    }

    /// The name of a glyph.
    ///
    /// Glyphs without a name in the font are named `glyphNNNNN`, after their
    /// glyph id.
    pub fn get(&self, glyph: GlyphId16) -> Cow<'_, str> {
        self.post
            .as_ref()
            .and_then(|post| post.glyph_name(glyph))
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(fallback_name(glyph)))
    }
}

fn fallback_name(glyph: GlyphId16) -> String {
    format!("glyph{:05}", glyph.to_u16())
}
