pub mod activity_list;
pub mod signup_form;
pub mod status_banner;
