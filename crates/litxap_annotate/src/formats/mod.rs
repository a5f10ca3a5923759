//! Markup for forums, web pages and chat.
//!
//! | Case        | BBCode             | HTML                   | Discord           |
//! |-------------|--------------------|------------------------|-------------------|
//! | stressed    | `[u]…[/u]`         | `<u>…</u>`             | `__…__`           |
//! | ambiguous   | `[color=yellow]`   | `<span class="am">`    | `\*…(AMBIGUOUS)`  |
//! | no matches  | `[color=red]`      | `<span class="nm">`    | `\*…(NO MATCHES)` |
//! | any stress  | `[color=skyblue]`  | `<span class="as">`    |                   |

mod bbcode;
mod discord;
mod html;

pub use bbcode::BbCode;
pub use discord::DiscordMarkdown;
pub use html::CompactHtml;
