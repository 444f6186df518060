/// The element the admin UI tree is mounted into.
pub trait Host {
    fn element_id(&self) -> &str;
    fn set_inner_html(&mut self, html: String);
}
