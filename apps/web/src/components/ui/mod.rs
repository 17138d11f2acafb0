mod form_field;
mod submit_button;
mod toast;

pub(crate) use form_field::FormField;
pub(crate) use submit_button::SubmitButton;
pub(crate) use toast::{ToastProvider, use_toasts};
