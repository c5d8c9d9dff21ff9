use dlist::List;

/// Builds a list holding the given values in order
pub fn list_from<T: Clone>(values: &[T]) -> List<T> {
    let mut list = List::new();
    for value in values {
        list.push_back(value.clone());
    }
    list
}

/// Collects the list contents into a vector, front to back
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}
