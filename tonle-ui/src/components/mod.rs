//! Shared UI components

pub mod button;
pub mod form;
pub mod helpers;
pub mod hero;
pub mod icons;
pub mod page_header;
pub mod panels;
pub mod status_modal;
pub mod team_hero;
pub mod text_input;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use form::{
    ApplicantStep, NavigationButtons, ReviewStep, ServiceStep, StepIndicator, StepLabel,
};
pub use helpers::PageContainer;
pub use hero::HeroBanner;
pub use icons::{
    AlertTriangleIcon, CheckIcon, ChevronLeftIcon, ChevronRightIcon, ClockIcon, CoinsIcon,
    DropletIcon, LoaderIcon, XIcon,
};
pub use page_header::PageHeader;
pub use panels::{HighlightCard, MissionPanel, ValuePanel, VisionPanel};
pub use status_modal::{ModalTone, StatusModal};
pub use team_hero::{TeamHero, TeamStat};
pub use text_input::{TextInput, TextInputSize};
