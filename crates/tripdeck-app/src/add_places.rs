use crate::route::{Navigation, Notice, create_path_for};

pub const MANUAL_SEARCH_NOTICE: &str = "Manual place search coming soon!";

/// Input for one opening of the add-places dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPlacesRequest {
    pub destination: String,
    pub day_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlacesOption {
    GenerateWithAi,
    AddManually,
}

pub const ADD_PLACES_OPTIONS: [AddPlacesOption; 2] =
    [AddPlacesOption::GenerateWithAi, AddPlacesOption::AddManually];

/// What the dialog asks its host to do after closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPlacesEffect {
    Navigate(Navigation),
    Notify(Notice),
}

impl AddPlacesOption {
    pub fn label(self) -> &'static str {
        match self {
            Self::GenerateWithAi => "Generate with AI",
            Self::AddManually => "Add Manually",
        }
    }
}

impl AddPlacesRequest {
    pub fn new(destination: impl Into<String>, day_number: u32) -> Self {
        Self {
            destination: destination.into(),
            day_number,
        }
    }

    pub fn title(&self) -> String {
        format!("Add Places to Day {}", self.day_number)
    }

    pub fn description(&self) -> &'static str {
        "Choose how you'd like to add places to your itinerary"
    }

    pub fn subtitle(&self, option: AddPlacesOption) -> String {
        match option {
            AddPlacesOption::GenerateWithAi => {
                format!("Get personalized place suggestions for {}", self.destination)
            }
            AddPlacesOption::AddManually => "Search and browse places to add".to_string(),
        }
    }

    pub fn choose(&self, option: AddPlacesOption) -> AddPlacesEffect {
        match option {
            AddPlacesOption::GenerateWithAi => {
                AddPlacesEffect::Navigate(Navigation::To(create_path_for(&self.destination)))
            }
            AddPlacesOption::AddManually => {
                AddPlacesEffect::Notify(Notice::info(MANUAL_SEARCH_NOTICE))
            }
        }
    }
}
