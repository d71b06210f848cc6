pub mod dashboard;
pub mod form_detail;
pub mod forms;
pub mod new_form;

pub use dashboard::Dashboard;
pub use form_detail::FormDetail;
pub use forms::Forms;
pub use new_form::NewForm;
