//! The quick-entry screen
//!
//! Composes the numeric pad, the entry coordinator and the collapsing title
//! bar, and binds them to the category list, the selected date and the host's
//! collaborators.

use std::time::Instant;

use chrono::NaiveDate;

use crate::collapse::{AlphaFade, CollapseState, CollapseVisibilityController};
use crate::config::Settings;
use crate::display::{to_long_string, today};
use crate::entry::{ExpenseEntryCoordinator, SubmitOutcome, UndoFailed, UndoToken};
use crate::error::{OutlayError, OutlayResult};
use crate::host::{ExpenseRepository, Navigator, PresentationHost};
use crate::models::Category;
use crate::numpad::{
    AmountField, KeyOutcome, MirrorText, NumpadController, NumpadKey, Shake, ShakingValidator,
    SimpleNumpadValidator,
};

/// Keypad wiring used by the screen: amount field, shaking validator and a
/// mirror of the amount for the collapsed title bar
pub type ScreenNumpad = NumpadController<AmountField, ShakingValidator, MirrorText>;

/// Screen controller for entering expenses
pub struct MainScreen<R, H> {
    repo: R,
    host: H,
    numpad: ScreenNumpad,
    coordinator: ExpenseEntryCoordinator,
    collapse: CollapseVisibilityController,
    categories: Vec<Category>,
    selected_date: NaiveDate,
    date_label: String,
    date_format: String,
    clock: fn() -> NaiveDate,
}

impl<R, H> MainScreen<R, H>
where
    R: ExpenseRepository,
    H: PresentationHost + Navigator,
{
    pub fn new(repo: R, host: H, settings: &Settings) -> Self {
        let selected_date = today();
        Self {
            repo,
            host,
            numpad: NumpadController::new(
                AmountField::new(),
                ShakingValidator::new(SimpleNumpadValidator),
                MirrorText::default(),
            ),
            coordinator: ExpenseEntryCoordinator::new(settings.currency_symbol.clone()),
            collapse: CollapseVisibilityController::new(),
            categories: Vec::new(),
            selected_date,
            date_label: to_long_string(selected_date, &settings.long_date_format),
            date_format: settings.long_date_format.clone(),
            clock: today,
        }
    }

    /// Use a different source of "today"; also resets the selected date
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self.coordinator = self.coordinator.with_clock(clock);
        self.set_selected_date(clock());
        self
    }

    /// Re-entry: clear the amount, reload categories and today's summary.
    ///
    /// If a collaborator fails the cached categories are left as they were.
    pub fn resume(&mut self) -> OutlayResult<()> {
        self.numpad.set_text("");

        let categories = self.repo.load_categories()?;
        self.host.display_categories(&categories);
        self.categories = categories;

        let summary = self.repo.load_summary((self.clock)())?;
        self.host.display_summary(summary);
        Ok(())
    }

    pub fn press_key(&mut self, key: NumpadKey) -> KeyOutcome {
        self.numpad.press(key)
    }

    /// Type a character; returns `None` if it is not a keypad character
    pub fn press_char(&mut self, c: char) -> Option<KeyOutcome> {
        NumpadKey::from_char(c).map(|key| self.numpad.press(key))
    }

    /// Record the current amount against the category at `index`
    pub fn tap_category(&mut self, index: usize) -> OutlayResult<SubmitOutcome> {
        let category = self
            .categories
            .get(index)
            .cloned()
            .ok_or_else(|| OutlayError::category_not_found(format!("#{}", index + 1)))?;

        self.coordinator.submit(
            &category,
            &mut self.numpad,
            self.selected_date,
            &mut self.repo,
            &mut self.host,
        )
    }

    /// Reverse a recorded expense from its confirmation
    pub fn reverse(&mut self, token: UndoToken) -> Result<(), UndoFailed> {
        self.coordinator
            .reverse(token, &mut self.numpad, &mut self.repo, &mut self.host)
    }

    /// Scroll callback from the collapsing header
    pub fn on_offset_changed(&mut self, vertical_offset: i32, total_scroll_range: i32) -> Option<AlphaFade> {
        self.collapse
            .on_offset_changed(vertical_offset, total_scroll_range)
    }

    /// Date picker confirmation; `month` is 1-based
    pub fn confirm_date(&mut self, year: i32, month: u32, day: u32) -> OutlayResult<()> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            OutlayError::Validation(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
        })?;
        self.set_selected_date(date);
        Ok(())
    }

    /// Menu action: open the report for the selected date
    pub fn open_report(&mut self) {
        self.host.go_to_report(self.selected_date);
    }

    pub fn amount_text(&self) -> String {
        self.numpad.text()
    }

    /// The amount as mirrored into the title bar
    pub fn title_amount(&self) -> &str {
        self.numpad.observer().text()
    }

    pub fn shake(&self) -> &Shake {
        self.numpad.validator().shake()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn collapse_state(&self) -> CollapseState {
        self.collapse.state()
    }

    pub fn title_alpha(&self, now: Instant) -> f32 {
        self.collapse.title_alpha(now)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.date_label = to_long_string(date, &self.date_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Confirmation;
    use crate::models::{NewExpense, Summary};
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[derive(Default)]
    struct RecordingHost {
        summaries: Vec<Summary>,
        category_pushes: Vec<Vec<String>>,
        confirmations: Vec<Confirmation>,
        reports: Vec<NaiveDate>,
    }

    impl PresentationHost for RecordingHost {
        fn display_summary(&mut self, summary: Summary) {
            self.summaries.push(summary);
        }

        fn display_categories(&mut self, categories: &[Category]) {
            self.category_pushes
                .push(categories.iter().map(|c| c.title.clone()).collect());
        }

        fn show_confirmation(&mut self, confirmation: Confirmation) {
            self.confirmations.push(confirmation);
        }
    }

    impl Navigator for RecordingHost {
        fn go_to_report(&mut self, date: NaiveDate) {
            self.reports.push(date);
        }
    }

    fn screen() -> MainScreen<MemoryStore, RecordingHost> {
        let settings = Settings::default();
        let mut screen = MainScreen::new(
            MemoryStore::from_settings(&settings),
            RecordingHost::default(),
            &settings,
        )
        .with_clock(fixed_today);
        screen.resume().unwrap();
        screen
    }

    fn type_amount(screen: &mut MainScreen<MemoryStore, RecordingHost>, text: &str) {
        for c in text.chars() {
            screen.press_char(c).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert_eq!(screen.selected_date(), fixed_today());
        assert_eq!(screen.date_label(), "June 14, 2024");
        assert_eq!(screen.amount_text(), "");
        assert_eq!(screen.collapse_state(), CollapseState::Collapsed);
        assert_eq!(screen.title_alpha(Instant::now()), 0.0);
    }

    #[test]
    fn test_resume_pushes_categories_and_summary() {
        let screen = screen();
        assert_eq!(screen.categories().len(), 8);
        assert_eq!(screen.host().category_pushes[0][0], "Food");
        assert_eq!(screen.host().summaries[0], Summary::empty(fixed_today()));
    }

    #[test]
    fn test_resume_clears_amount() {
        let mut screen = screen();
        type_amount(&mut screen, "42");
        screen.resume().unwrap();
        assert_eq!(screen.amount_text(), "");
        assert_eq!(screen.title_amount(), "");
    }

    #[test]
    fn test_typing_mirrors_into_title() {
        let mut screen = screen();
        type_amount(&mut screen, "3.75");
        assert_eq!(screen.title_amount(), "3.75");
        assert_eq!(screen.press_char('x'), None);
    }

    #[test]
    fn test_tap_records_against_selected_date() {
        let mut screen = screen();
        screen.confirm_date(2024, 6, 1).unwrap();
        type_amount(&mut screen, "20");

        let outcome = screen.tap_category(1).unwrap();

        let SubmitOutcome::Recorded(id) = outcome else {
            panic!("expected a recorded expense");
        };
        let expense = screen.repo().get(id).unwrap();
        assert_eq!(expense.category_title, "Transport");
        assert_eq!(expense.reported_at, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(expense.amount, Decimal::from(20));
        assert_eq!(screen.amount_text(), "");
        // the refresh is always for today, not the selected date
        assert_eq!(screen.host().summaries.last().unwrap().date, fixed_today());
    }

    #[test]
    fn test_invalid_tap_shakes_without_recording() {
        let mut screen = screen();
        type_amount(&mut screen, "0.");

        assert_eq!(screen.tap_category(0).unwrap(), SubmitOutcome::Rejected);
        assert_eq!(screen.repo().expense_count(), 0);
        assert_eq!(screen.amount_text(), "0.");
        assert!(screen.shake().is_shaking(Instant::now()));
    }

    #[test]
    fn test_tap_unknown_category() {
        let mut screen = screen();
        type_amount(&mut screen, "1");
        let err = screen.tap_category(99).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(screen.amount_text(), "1");
    }

    #[test]
    fn test_submit_then_reverse_round_trip() {
        let mut screen = screen();
        type_amount(&mut screen, "12.30");
        screen.tap_category(0).unwrap();

        let token = screen.host_mut().confirmations.pop().unwrap().token;
        screen.reverse(token).unwrap();

        assert_eq!(screen.amount_text(), "12.30");
        assert_eq!(screen.title_amount(), "12.30");
        assert_eq!(screen.repo().expense_count(), 0);
    }

    #[test]
    fn test_confirm_invalid_date_keeps_selection() {
        let mut screen = screen();
        let err = screen.confirm_date(2023, 2, 29).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(screen.selected_date(), fixed_today());

        screen.confirm_date(2024, 2, 29).unwrap();
        assert_eq!(screen.date_label(), "February 29, 2024");
    }

    #[test]
    fn test_open_report_uses_selected_date() {
        let mut screen = screen();
        screen.confirm_date(2024, 1, 5).unwrap();
        screen.open_report();
        assert_eq!(
            screen.host().reports,
            vec![NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()]
        );
    }

    #[test]
    fn test_offsets_drive_collapse() {
        let mut screen = screen();
        assert!(screen.on_offset_changed(0, 0).is_some());
        assert_eq!(screen.collapse_state(), CollapseState::Expanded);
        assert!(screen.on_offset_changed(-30, 100).is_some());
        assert_eq!(screen.collapse_state(), CollapseState::Collapsed);
        assert!(screen.on_offset_changed(-80, 100).is_none());
    }

    struct BrokenStore;

    impl ExpenseRepository for BrokenStore {
        fn create_expense(&mut self, _expense: &NewExpense) -> OutlayResult<crate::models::ExpenseId> {
            Err(OutlayError::Storage("offline".into()))
        }

        fn delete_expense(&mut self, _id: crate::models::ExpenseId) -> OutlayResult<()> {
            Err(OutlayError::Storage("offline".into()))
        }

        fn load_categories(&self) -> OutlayResult<Vec<Category>> {
            Err(OutlayError::Storage("offline".into()))
        }

        fn load_summary(&self, _date: NaiveDate) -> OutlayResult<Summary> {
            Err(OutlayError::Storage("offline".into()))
        }
    }

    #[test]
    fn test_failed_resume_keeps_cache_empty() {
        let settings = Settings::default();
        let mut screen = MainScreen::new(BrokenStore, RecordingHost::default(), &settings);

        assert!(screen.resume().is_err());
        assert!(screen.categories().is_empty());
        assert!(screen.host().category_pushes.is_empty());
    }
}
