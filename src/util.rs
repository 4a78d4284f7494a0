use std::collections::HashMap;

/// Labels of the classifier output classes, indexed by class
pub const CLASS_LABELS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '[', ']',
];

lazy_static! {
    static ref CLASS_INDICES: HashMap<char, usize> = {
        let mut map = HashMap::with_capacity(CLASS_LABELS.len());
        for (class, &label) in CLASS_LABELS.iter().enumerate() {
            map.insert(label, class);
        }
        map
    };
}

/// Get the symbol for a classifier output class
///
/// # Examples
///
/// ```
/// # use handcalc::label_for_class;
/// assert_eq!(label_for_class(7), Some('7'));
/// assert_eq!(label_for_class(14), Some('['));
/// assert_eq!(label_for_class(16), None);
/// ```
#[must_use]
pub fn label_for_class(class: usize) -> Option<char> {
    CLASS_LABELS.get(class).copied()
}

/// Get the classifier output class for a symbol
#[must_use]
pub fn class_for_label(label: char) -> Option<usize> {
    CLASS_INDICES.get(&label).copied()
}
