use dex_protocol::Pokemon;

/// Category projection: the ordered subsequence of records carrying `tag`
/// (case-insensitive). Pure and synchronous; category views call this on
/// every read instead of holding state of their own. No windowing is
/// applied to the result.
pub fn filter_by_type<'a>(records: &'a [Pokemon], tag: &str) -> Vec<&'a Pokemon> {
    records.iter().filter(|p| p.has_type(tag)).collect()
}
