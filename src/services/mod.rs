// PocketReader services
// Services provide functionality shared across screens: page metadata
// fetching, ad-host filtering, and special-link rules.

pub mod ad_filter;
pub mod link_rules;
pub mod metadata_fetcher;
