/// Produces the display id assigned to a record at creation.
///
/// Implementations are total; uniqueness is not guaranteed by the trait.
pub trait IIdGenerator: Send {
    fn next_id(&mut self) -> String;
}
