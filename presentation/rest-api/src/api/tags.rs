use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service information
    Index,
    Health,
    /// Customer wishlists
    Wishlists,
    /// Items inside a wishlist
    Items,
}
