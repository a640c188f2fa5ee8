/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}
