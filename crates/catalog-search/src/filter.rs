use catalog_core::types::{EquipmentRecord, ALL_CATEGORY};

/// Keep the records filed under `selected`, in their current order.
/// `"All"` keeps everything; an unknown label keeps nothing.
pub fn filter_by_category<'a>(records: &[&'a EquipmentRecord], selected: &str) -> Vec<&'a EquipmentRecord> {
    if selected == ALL_CATEGORY {
        return records.to_vec();
    }
    records.iter().copied().filter(|r| r.has_category(selected)).collect()
}
