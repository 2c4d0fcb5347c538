use log::{debug, info};

use divisive_norm::{
    evaluate, DemoInputs, PlotSeries, POSITION_RANGE, WEIGHT_RANGE,
};

use crate::demo::config_reader::Scenario;

/// Keyboard step applied by one adjustment of a slider.
pub const SLIDER_STEP: f64 = 0.05;

/// One of the seven input sliders, in sidebar order.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SliderId {
    ASocial,
    AFiscal,
    BSocial,
    BFiscal,
    CSocial,
    CFiscal,
    Weight,
}

impl SliderId {
    pub const ALL: [SliderId; 7] = [
        SliderId::ASocial,
        SliderId::AFiscal,
        SliderId::BSocial,
        SliderId::BFiscal,
        SliderId::CSocial,
        SliderId::CFiscal,
        SliderId::Weight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SliderId::ASocial => "A-Social",
            SliderId::AFiscal => "A-Fiscal",
            SliderId::BSocial => "B-Social",
            SliderId::BFiscal => "B-Fiscal",
            SliderId::CSocial => "C-Social",
            SliderId::CFiscal => "C-Fiscal",
            SliderId::Weight => "Weight",
        }
    }

    pub fn range(self) -> (f64, f64) {
        match self {
            SliderId::Weight => WEIGHT_RANGE,
            _ => POSITION_RANGE,
        }
    }

    pub fn get(self, inputs: &DemoInputs) -> f64 {
        match self {
            SliderId::ASocial => inputs.positions[0].social,
            SliderId::AFiscal => inputs.positions[0].fiscal,
            SliderId::BSocial => inputs.positions[1].social,
            SliderId::BFiscal => inputs.positions[1].fiscal,
            SliderId::CSocial => inputs.positions[2].social,
            SliderId::CFiscal => inputs.positions[2].fiscal,
            SliderId::Weight => inputs.weight,
        }
    }

    /// Writes a value back, clamped to the slider's range. The pipeline never
    /// sees an out-of-range coordinate.
    pub fn set(self, inputs: &mut DemoInputs, value: f64) {
        let (min, max) = self.range();
        let clamped = value.clamp(min, max);
        match self {
            SliderId::ASocial => inputs.positions[0].social = clamped,
            SliderId::AFiscal => inputs.positions[0].fiscal = clamped,
            SliderId::BSocial => inputs.positions[1].social = clamped,
            SliderId::BFiscal => inputs.positions[1].fiscal = clamped,
            SliderId::CSocial => inputs.positions[2].social = clamped,
            SliderId::CFiscal => inputs.positions[2].fiscal = clamped,
            SliderId::Weight => inputs.weight = clamped,
        }
    }
}

/// Represents actions that can be dispatched to the App.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick,
    NextSlider,
    PrevSlider,
    Increase,
    Decrease,
    Reset,
    CycleScenario,
    ToggleHelp,
}

pub struct AppState {
    pub is_running: bool,
    pub show_help: bool,
    /// Index of the selected slider in `SliderId::ALL`.
    pub selected: usize,
    pub inputs: DemoInputs,
    /// The series both panels are drawn from, recomputed whenever any input
    /// changes so that the panels always reflect the same snapshot.
    pub series: PlotSeries,
    /// Name of the preset currently applied, cleared on manual adjustment.
    pub scenario_name: Option<String>,
}

pub struct App {
    pub state: AppState,
    scenarios: Vec<Scenario>,
    next_scenario: usize,
}

impl App {
    pub fn new(scenarios: Vec<Scenario>) -> App {
        let inputs = DemoInputs::DEFAULT;
        App {
            state: AppState {
                is_running: true,
                show_help: false,
                selected: 0,
                inputs,
                series: evaluate(&inputs),
                scenario_name: None,
            },
            scenarios,
            next_scenario: 0,
        }
    }

    pub fn has_scenarios(&self) -> bool {
        !self.scenarios.is_empty()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("dispatch: quitting");
                self.state.is_running = false;
            }
            Action::NextSlider => {
                self.state.selected = (self.state.selected + 1) % SliderId::ALL.len();
            }
            Action::PrevSlider => {
                self.state.selected = if self.state.selected == 0 {
                    SliderId::ALL.len() - 1
                } else {
                    self.state.selected - 1
                };
            }
            Action::Increase => self.adjust(SLIDER_STEP),
            Action::Decrease => self.adjust(-SLIDER_STEP),
            Action::Reset => {
                self.state.inputs = DemoInputs::DEFAULT;
                self.state.scenario_name = None;
                self.refresh();
            }
            Action::CycleScenario => self.apply_next_scenario(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Tick => {}
        }
    }

    fn adjust(&mut self, delta: f64) {
        let slider = SliderId::ALL[self.state.selected];
        let value = slider.get(&self.state.inputs) + delta;
        slider.set(&mut self.state.inputs, value);
        debug!(
            "adjust: {} -> {}",
            slider.label(),
            slider.get(&self.state.inputs)
        );
        // The values no longer correspond to the preset.
        self.state.scenario_name = None;
        self.refresh();
    }

    fn apply_next_scenario(&mut self) {
        if self.scenarios.is_empty() {
            return;
        }
        let scenario = &self.scenarios[self.next_scenario];
        info!("apply_next_scenario: {}", scenario.name);
        self.state.inputs = scenario.inputs;
        self.state.scenario_name = Some(scenario.name.clone());
        self.next_scenario = (self.next_scenario + 1) % self.scenarios.len();
        self.refresh();
    }

    /// One snapshot in, both panels out.
    fn refresh(&mut self) {
        self.state.series = evaluate(&self.state.inputs);
    }
}
