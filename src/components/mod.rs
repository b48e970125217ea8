pub mod post_form;
pub mod post_list;
