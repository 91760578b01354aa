use dynamic_array_list::{DynamicArrayList, List};

fn greetings() -> DynamicArrayList<String> {
    let mut list = DynamicArrayList::new();
    list.add("Hello".to_string());
    list.add("Bye".to_string());
    list.add("Good".to_string());
    list
}

#[test]
fn test_list_initialization() {
    let list: DynamicArrayList<String> = DynamicArrayList::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_get_element_by_index() {
    let list = greetings();

    assert_eq!(list.get(0).unwrap(), "Hello");
    assert_eq!(list.get(1).unwrap(), "Bye");
    assert_eq!(list.get(2).unwrap(), "Good");
    assert_eq!(list.len(), 3);
}

#[test]
fn test_add_element() {
    let mut list = greetings();

    assert!(list.add("new".to_string()));

    assert_eq!(list.get(3).unwrap(), "new");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_add_million_elements() {
    let mut list = greetings();

    for i in 0..1_000_000 {
        list.add(format!("new {i}"));
    }

    assert_eq!(list.len(), 1_000_003);
    assert_eq!(list.get(0).unwrap(), "Hello");
    assert_eq!(list.get(2).unwrap(), "Good");
    assert_eq!(list.get(3).unwrap(), "new 0");
    assert_eq!(list.get(500_003).unwrap(), "new 500000");
    assert_eq!(list.get(1_000_002).unwrap(), "new 999999");
}

#[test]
fn test_add_preserves_append_order() {
    let mut list = DynamicArrayList::new();
    for i in 0..1000 {
        list.add(i);
    }

    assert_eq!(list.len(), 1000);
    for i in 0..1000 {
        assert_eq!(*list.get(i).unwrap(), i);
    }
}

#[test]
fn test_add_at_index() {
    let mut list = greetings();
    let moved = list.get(1).unwrap().clone();

    list.add_at(1, "new".to_string()).unwrap();

    assert_eq!(list.get(1).unwrap(), "new");
    assert_eq!(list.get(2).unwrap(), &moved);
    assert_eq!(list.get(3).unwrap(), "Good");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_add_at_front_and_end() {
    let mut list = greetings();

    list.add_at(0, "first".to_string()).unwrap();
    list.add_at(list.len(), "last".to_string()).unwrap();

    assert_eq!(list.to_string(), "[first, Hello, Bye, Good, last]");
    assert_eq!(list.len(), 5);
}

#[test]
fn test_add_at_into_empty_list() {
    let mut list = DynamicArrayList::new();

    list.add_at(0, 'x').unwrap();

    assert_eq!(list.get(0), Ok(&'x'));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_by_index() {
    let mut list = greetings();

    let removed = list.remove(0).unwrap();

    assert_eq!(removed, "Hello");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap(), "Bye");
    assert_eq!(list.get(1).unwrap(), "Good");
}

#[test]
fn test_remove_last_index() {
    let mut list = greetings();

    assert_eq!(list.remove(2).unwrap(), "Good");
    assert_eq!(list.len(), 2);
    assert!(list.get(2).is_err());
}

#[test]
fn test_remove_by_value() {
    let mut list = greetings();

    assert!(list.remove_value(&"Hello".to_string()));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap(), "Bye");
    assert_eq!(list.get(1).unwrap(), "Good");
}

#[test]
fn test_remove_by_missing_value() {
    let mut list = greetings();

    assert!(!list.remove_value(&"wrong".to_string()));

    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "[Hello, Bye, Good]");
}

#[test]
fn test_remove_value_removes_first_occurrence_only() {
    let mut list: DynamicArrayList<i32> = [1, 2, 1, 3, 1].into_iter().collect();

    assert!(list.remove_value(&1));

    assert_eq!(list.to_string(), "[2, 1, 3, 1]");
    assert_eq!(list.index_of(&1), Some(1));
}

#[test]
fn test_set_element() {
    let mut list = greetings();
    let before = list.get(1).unwrap().clone();

    let previous = list.set(1, "new".to_string()).unwrap();

    assert_eq!(previous, before);
    assert_eq!(list.get(1).unwrap(), "new");
    assert_eq!(list.len(), 3);
}

#[test]
fn test_index_of() {
    let list = greetings();

    assert_eq!(list.index_of(&"Hello".to_string()), Some(0));
    assert_eq!(list.index_of(&"Good".to_string()), Some(2));
    assert_eq!(list.index_of(&"wrong".to_string()), None);
}

#[test]
fn test_index_of_returns_smallest_index() {
    let list: DynamicArrayList<char> = "abcabc".chars().collect();

    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.index_of(&'c'), Some(2));
}

#[test]
fn test_contains() {
    let list = greetings();

    assert!(list.contains(&"Hello".to_string()));
    assert!(!list.contains(&"some".to_string()));
}

#[test]
fn test_clear() {
    let mut list = greetings();

    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.get(0).is_err());
    assert_eq!(list.to_string(), "[]");
}

#[test]
fn test_reuse_after_clear() {
    let mut list = greetings();
    list.clear();

    list.add("again".to_string());

    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap(), "again");
}

#[test]
fn test_is_empty() {
    let mut list = greetings();
    assert!(!list.is_empty());

    list.remove(0).unwrap();
    list.remove(0).unwrap();
    list.remove(0).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_to_array() {
    let list = greetings();

    let snapshot = list.to_array();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(&*snapshot[0], "Hello");
    assert_eq!(&*snapshot[1], "Bye");
    assert_eq!(&*snapshot[2], "Good");
}

#[test]
fn test_to_array_is_independent() {
    let mut list = greetings();

    let mut snapshot = list.to_array();
    list.set(0, "changed".to_string()).unwrap();
    list.add("more".to_string());
    snapshot[1] = "edited".to_string();

    assert_eq!(&*snapshot, ["Hello", "edited", "Good"]);
    assert_eq!(list.get(1).unwrap(), "Bye");
    assert_eq!(list.to_string(), "[changed, Bye, Good, more]");
}

#[test]
fn test_to_string_renders_logical_elements() {
    let mut list = greetings();
    assert_eq!(list.to_string(), "[Hello, Bye, Good]");

    list.remove(1).unwrap();
    assert_eq!(list.to_string(), "[Hello, Good]");
}

#[test]
fn test_debug_renders_logical_elements() {
    let list: DynamicArrayList<i32> = [1, 2].into_iter().collect();

    assert_eq!(format!("{list:?}"), "[1, 2]");
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small = DynamicArrayList::with_capacity(2).unwrap();
    small.add(1);
    small.add(2);
    let large: DynamicArrayList<i32> = [1, 2].into_iter().collect();

    assert_eq!(small, large);
    assert_ne!(small.capacity(), large.capacity());

    small.add(3);
    assert_ne!(small, large);
}

#[test]
fn test_clone_is_independent() {
    let list = greetings();
    let mut copy = list.clone();

    copy.set(0, "changed".to_string()).unwrap();

    assert_eq!(list.get(0).unwrap(), "Hello");
    assert_eq!(copy.get(0).unwrap(), "changed");
}

#[test]
fn test_default_matches_new() {
    let list: DynamicArrayList<u8> = DynamicArrayList::default();

    assert!(list.is_empty());
    assert_eq!(list.capacity(), DynamicArrayList::<u8>::new().capacity());
}

#[test]
fn test_extend_appends() {
    let mut list = greetings();

    list.extend(["a".to_string(), "b".to_string()]);

    assert_eq!(list.to_string(), "[Hello, Bye, Good, a, b]");
}
