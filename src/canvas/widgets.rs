pub mod add_button;
pub mod input_field;
pub mod item_list;
