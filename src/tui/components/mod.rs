// Components module - reusable UI building blocks
//
// - Search box: the text field the user types into
// - Country list: list region (flag + name per match)
// - Country card: info region (single detailed match)
// - Status bar: display state and last log line
// - Toast: notification overlay
//
// Each component is a focused, single-responsibility module.

pub mod country_card;
pub mod country_list;
pub mod formatters;
pub mod search_box;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
