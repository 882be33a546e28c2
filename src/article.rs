mod page;
mod source;
mod view;

pub use page::ArticlePage;
pub use source::{tag_href, ArticlePath, ArticleSource, FsSource};
pub use view::{ArticleView, Ticket};
