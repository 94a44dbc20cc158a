//! The closed set of renderable article bodies. Every article body the
//! site can render is one [`Content`] variant; the registry pairs each
//! variant with its metadata at construction, so there is no string-keyed
//! dispatch anywhere. Bodies are markdown and render to HTML with
//! `pulldown-cmark`.

use crate::articles;
use pulldown_cmark::{html, Options, Parser};

/// One variant per article shipped with the site. Adding an article means
/// adding a variant here, a module under [`crate::articles`], and a line in
/// [`crate::articles::registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    ManagingStateLaravelAngular,
    StripeAngularLaravelPayments,
}

impl Content {
    /// The article's markdown source.
    pub fn markdown(&self) -> &'static str {
        match self {
            Content::ManagingStateLaravelAngular => {
                articles::managing_state_laravel_angular::BODY
            }
            Content::StripeAngularLaravelPayments => {
                articles::stripe_angular_laravel_payments::BODY
            }
        }
    }

    /// Renders the article body to an HTML fragment. Pure and infallible;
    /// the body is a compiled-in string and the renderer writes into a
    /// `String`.
    pub fn to_html(&self) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);

        let mut body = String::new();
        html::push_html(&mut body, Parser::new_ext(self.markdown(), options));
        body
    }
}
