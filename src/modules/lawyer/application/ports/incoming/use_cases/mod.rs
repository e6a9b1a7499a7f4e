pub mod delete_lawyer;
pub mod get_lawyer;
pub mod list_lawyers;
pub mod login_lawyer;
pub mod register_lawyer;
pub mod update_lawyer;

pub use delete_lawyer::{DeleteLawyerError, DeleteLawyerUseCase};
pub use get_lawyer::{GetLawyerError, GetLawyerUseCase};
pub use list_lawyers::{LawyerPublicProfile, ListLawyersError, ListLawyersUseCase};
pub use login_lawyer::{LoginLawyerError, LoginLawyerUseCase};
pub use register_lawyer::{
    LawyerSession, RegisterLawyerCommand, RegisterLawyerCommandError, RegisterLawyerError,
    RegisterLawyerForm, RegisterLawyerUseCase,
};
pub use update_lawyer::{
    UpdateLawyerCommand, UpdateLawyerCommandError, UpdateLawyerError, UpdateLawyerForm,
    UpdateLawyerUseCase,
};
