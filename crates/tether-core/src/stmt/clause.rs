/// The statement clause a navigable's columns are being visited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    Insert,
    Update,
    Delete,
    Where,
    Irrelevant,
}
