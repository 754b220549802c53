//! UI Components
//!
//! Reusable Leptos components.

mod mode_tabs;
mod new_item_form;
mod difficulty_selector;
mod item_row;
mod delete_confirm_button;
mod filter_bar;
mod task_list_view;
mod player_panel;
mod focus_view;
mod quest_board;
mod toast_stack;

pub use mode_tabs::ModeTabs;
pub use new_item_form::NewItemForm;
pub use difficulty_selector::DifficultySelector;
pub use item_row::ItemRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use task_list_view::TaskListView;
pub use player_panel::PlayerPanel;
pub use focus_view::FocusView;
pub use quest_board::QuestBoard;
pub use toast_stack::ToastStack;
