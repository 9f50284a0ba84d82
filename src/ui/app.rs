use chrono::{Local, NaiveDate};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::export::export_plan_csv;
use crate::model::{BlockGroup, BlockSummary, FirmRecord, Inventory, PhaseInventory, Unit};
use crate::plan::{payment_plan, PaymentPlanItem};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    UnitDetail,
    PaymentSchedule,
    Landmarks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Phases,
    Blocks,
    Units,
}

pub struct App {
    pub inventory: Inventory,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_phase: usize,
    pub selected_block: usize,
    pub selected_unit: usize,
    pub units_scroll_offset: usize,
    pub schedule_scroll_offset: usize,
    /// Down-payment date used for derived schedules (today at launch).
    pub plan_start: NaiveDate,
    /// One-shot feedback line shown in the schedule footer.
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            view: View::Dashboard,
            focus_panel: FocusPanel::Blocks, // Start on Blocks
            selected_phase: 0,
            selected_block: 0,
            selected_unit: 0,
            units_scroll_offset: 0,
            schedule_scroll_offset: 0,
            plan_start: Local::now().date_naive(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::UnitDetail => super::dashboard::draw_unit_detail(frame, self),
            View::PaymentSchedule => super::dashboard::draw_schedule(frame, self),
            View::Landmarks => super::dashboard::draw_landmarks(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.view {
                View::Dashboard => self.handle_dashboard_keys(key.code),
                View::UnitDetail => self.handle_detail_keys(key.code),
                View::PaymentSchedule => self.handle_schedule_keys(key.code),
                View::Landmarks => self.handle_landmark_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Enter => self.enter_unit_detail(),
            KeyCode::Char('m') => self.view = View::Landmarks,
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Dashboard,
            KeyCode::Left | KeyCode::Char('h') => self.previous_unit_in_detail(),
            KeyCode::Right | KeyCode::Char('l') => self.next_unit_in_detail(),
            KeyCode::Enter => self.enter_schedule(),
            _ => {}
        }
    }

    fn handle_schedule_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => {
                self.view = View::UnitDetail;
                self.schedule_scroll_offset = 0;
                self.status_message = None;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_schedule_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_schedule_down(),
            KeyCode::Char('s') => self.save_schedule(),
            _ => {}
        }
    }

    fn handle_landmark_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('m') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Phases => self.previous_phase(),
            FocusPanel::Blocks => self.previous_block(),
            FocusPanel::Units => self.previous_unit(),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Phases => self.next_phase(),
            FocusPanel::Blocks => self.next_block(),
            FocusPanel::Units => self.next_unit(),
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Units => self.focus_panel = FocusPanel::Blocks,
            FocusPanel::Blocks => self.focus_panel = FocusPanel::Phases,
            FocusPanel::Phases => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Phases => self.focus_panel = FocusPanel::Blocks,
            FocusPanel::Blocks => self.focus_panel = FocusPanel::Units,
            FocusPanel::Units => {}
        }
    }

    fn previous_phase(&mut self) {
        if self.selected_phase > 0 {
            self.selected_phase -= 1;
            self.reset_block_selection();
        }
    }

    fn next_phase(&mut self) {
        if self.selected_phase < self.inventory.phases.len().saturating_sub(1) {
            self.selected_phase += 1;
            self.reset_block_selection();
        }
    }

    fn previous_block(&mut self) {
        if self.selected_block > 0 {
            self.selected_block -= 1;
            self.reset_unit_selection();
        }
    }

    fn next_block(&mut self) {
        if self.selected_block < self.current_blocks().len().saturating_sub(1) {
            self.selected_block += 1;
            self.reset_unit_selection();
        }
    }

    fn previous_unit(&mut self) {
        if self.selected_unit > 0 {
            self.selected_unit -= 1;
            if self.selected_unit < self.units_scroll_offset {
                self.units_scroll_offset = self.selected_unit;
            }
        }
    }

    fn next_unit(&mut self) {
        let unit_count = self
            .selected_block_group()
            .map_or(0, |block| block.units.len());
        if self.selected_unit < unit_count.saturating_sub(1) {
            self.selected_unit += 1;
        }
    }

    fn reset_block_selection(&mut self) {
        self.selected_block = 0;
        self.reset_unit_selection();
    }

    fn reset_unit_selection(&mut self) {
        self.selected_unit = 0;
        self.units_scroll_offset = 0;
    }

    fn enter_unit_detail(&mut self) {
        // Only enter detail when focus is on the Units panel
        if self.focus_panel == FocusPanel::Units && self.selected_unit_ref().is_some() {
            self.view = View::UnitDetail;
        }
    }

    fn enter_schedule(&mut self) {
        if self.selected_unit_ref().is_some() {
            self.view = View::PaymentSchedule;
            self.schedule_scroll_offset = 0;
            self.status_message = None;
        }
    }

    /// Navigate to the previous unit in the detail view (wraps around).
    fn previous_unit_in_detail(&mut self) {
        let count = self
            .selected_block_group()
            .map_or(0, |block| block.units.len());
        if count == 0 {
            return;
        }
        if self.selected_unit > 0 {
            self.selected_unit -= 1;
        } else {
            self.selected_unit = count - 1;
        }
    }

    /// Navigate to the next unit in the detail view (wraps around).
    fn next_unit_in_detail(&mut self) {
        let count = self
            .selected_block_group()
            .map_or(0, |block| block.units.len());
        if count == 0 {
            return;
        }
        if self.selected_unit < count - 1 {
            self.selected_unit += 1;
        } else {
            self.selected_unit = 0;
        }
    }

    fn scroll_schedule_up(&mut self) {
        if self.schedule_scroll_offset > 0 {
            self.schedule_scroll_offset -= 1;
        }
    }

    fn scroll_schedule_down(&mut self) {
        let max = self.schedule_for_selected().len().saturating_sub(1);
        if self.schedule_scroll_offset < max {
            self.schedule_scroll_offset += 1;
        }
    }

    #[must_use]
    pub fn current_phase(&self) -> Option<&PhaseInventory> {
        self.inventory.phases.get(self.selected_phase)
    }

    #[must_use]
    pub fn current_blocks(&self) -> &[BlockGroup] {
        self.current_phase().map_or(&[], |phase| &phase.blocks)
    }

    #[must_use]
    pub fn selected_block_group(&self) -> Option<&BlockGroup> {
        self.current_blocks().get(self.selected_block)
    }

    #[must_use]
    pub fn selected_unit_ref(&self) -> Option<&Unit> {
        self.selected_block_group()
            .and_then(|block| block.units.get(self.selected_unit))
    }

    #[must_use]
    pub fn selected_block_summary(&self) -> Option<BlockSummary> {
        self.selected_block_group().map(BlockGroup::summary)
    }

    /// Firm claim on the selected unit, scoped to the selected phase.
    #[must_use]
    pub fn firm_for_selected(&self) -> Option<&FirmRecord> {
        let phase = self.current_phase()?.phase;
        let block = self.selected_block_group()?;
        let unit = block.units.get(self.selected_unit)?;
        self.inventory
            .firm_for_unit(&block.name, &unit.unit_number, Some(phase))
    }

    /// Payment schedule for the selected unit's list price. Units without
    /// an override price yield the degenerate all-zero schedule.
    #[must_use]
    pub fn schedule_for_selected(&self) -> Vec<PaymentPlanItem> {
        let price = self
            .selected_unit_ref()
            .and_then(|unit| unit.price_tl)
            .unwrap_or(0.0);
        payment_plan(price, self.plan_start)
    }

    fn save_schedule(&mut self) {
        let Some(block) = self.selected_block_group().map(|b| b.name.clone()) else {
            return;
        };
        let Some(unit_number) = self
            .selected_unit_ref()
            .map(|unit| unit.unit_number.clone())
        else {
            return;
        };

        let items = self.schedule_for_selected();
        let file_name = format!("payment_plan_{block}_{unit_number}.csv");
        self.status_message = Some(match export_plan_csv(&items, &file_name) {
            Ok(()) => format!("Saved {file_name}"),
            Err(err) => format!("Export failed: {err}"),
        });
    }
}
