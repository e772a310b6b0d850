use crate::source::{SourceError, TriviaSource};
use crate::utils::js_random_seed;
use clap::Args;
use cluegrid_core as game;
use game::Sampler;
use yew::prelude::*;

/// Runs the whole setup sequence for one game: list candidate categories,
/// sample the columns, fetch each picked category in turn and sample its
/// clues. Fetches are sequential, so the final list is already in
/// requested-id order. Any failure drops the half-built list on the floor.
async fn load_categories(
    source: &TriviaSource,
    sampler: &mut impl Sampler,
    config: game::GameConfig,
) -> Result<Vec<game::Category>, SourceError> {
    let ids = source.list_category_ids(config.candidate_pool).await?;
    let picked = sampler
        .pick(ids, config.categories)
        .map_err(|_| SourceError::InsufficientCategories)?;

    let mut categories = Vec::with_capacity(config.categories);
    for id in picked {
        let data = source.fetch_category(id).await?;
        let clues = sampler
            .pick(data.clues, config.clues_per_category)
            .map_err(|_| SourceError::InsufficientClues)?;

        let clues = clues
            .into_iter()
            .map(|clue| game::Clue::new(clue.question, clue.answer))
            .collect();
        categories.push(game::Category::new(data.title, clues));
    }

    log::debug!("loaded {} categories", categories.len());
    Ok(categories)
}

/// Orchestration state behind the view: the committed board plus the
/// generation token used to discard superseded loads.
///
/// Only the latest `begin` generation may ever commit; results of earlier
/// runs are dropped silently when they eventually resolve. A failed run
/// leaves the previously committed board untouched.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    board: game::Board,
    generation: u32,
    loading: bool,
    error: Option<String>,
}

impl GameSession {
    pub(crate) fn new(config: game::GameConfig) -> Self {
        Self {
            board: game::Board::new(config),
            generation: 0,
            loading: false,
            error: None,
        }
    }

    pub(crate) fn board(&self) -> &game::Board {
        &self.board
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a new orchestration run and returns its generation token.
    /// Starting while a run is in flight supersedes it.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error = None;
        log::debug!("game load started (generation {})", self.generation);
        self.generation
    }

    /// Applies a finished run. Returns whether anything user-visible changed;
    /// superseded results change nothing.
    pub(crate) fn finish(
        &mut self,
        generation: u32,
        result: Result<Vec<game::Category>, SourceError>,
    ) -> bool {
        if generation != self.generation {
            log::debug!("discarding superseded game load (generation {})", generation);
            return false;
        }

        self.loading = false;
        match result {
            Ok(categories) => {
                // single assignment, the atomic commit of the new game
                self.board.set_categories(categories);
            }
            Err(err) => {
                log::error!("game load failed: {}", err);
                self.error = Some(format!("Trivia source unavailable ({})", err));
            }
        }
        true
    }

    /// Click handler; cells of an already-committed board stay clickable
    /// even while a new load is in flight.
    pub(crate) fn reveal(&mut self, pos: game::CellPos) -> bool {
        match self.board.reveal(pos) {
            Ok(update) => update.changed,
            Err(err) => {
                // invalid position is a presentation bug; log and ignore
                log::error!("ignoring click at {:?}: {}", pos, err);
                false
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    Loaded {
        generation: u32,
        result: Result<Vec<game::Category>, SourceError>,
    },
    CellClicked(game::CellPos),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a sampler seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Override the trivia API base URL
    #[arg(long)]
    pub(crate) api: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    source: TriviaSource,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: GameSession::new(game::GameConfig::default()),
            source: TriviaSource::new(ctx.props().api.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartGame => {
                let generation = self.session.begin();
                let config = self.session.board().config();
                let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
                let source = self.source.clone();
                let link = ctx.link().clone();

                wasm_bindgen_futures::spawn_local(async move {
                    let mut sampler = game::RandomSampler::new(seed ^ u64::from(generation));
                    let result = load_categories(&source, &mut sampler, config).await;
                    link.send_message(Msg::Loaded { generation, result });
                });
                true
            }
            Msg::Loaded { generation, result } => self.session.finish(generation, result),
            Msg::CellClicked(pos) => {
                log::trace!("cell click: {:?}", pos);
                self.session.reveal(pos)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let layout = game::BoardLayout::build(self.session.board().categories());
        let loading = self.session.is_loading();
        let label = if self.session.board().is_empty() {
            "Start Game"
        } else {
            "Reset Game"
        };

        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::StartGame);

        html! {
            <div class="cluegrid">
                <button class="start" onclick={cb_start}>{ label }</button>
                if loading {
                    <div class="loader">{ "Loading…" }</div>
                }
                if let Some(error) = self.session.error() {
                    <p class="error">{ error.to_string() }</p>
                }
                if !self.session.board().is_empty() {
                    <table class={classes!("board", loading.then_some("busy"))}>
                        <thead>
                            <tr>
                                { for layout.headers().iter().map(|title| html! {
                                    <th>{ title.clone() }</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for (0..layout.rows()).map(|row| html! {
                                <tr>
                                    { for (0..layout.cols()).map(|col| {
                                        let cell = layout.cell(row, col);
                                        let pos = cell.pos;
                                        let onclick = ctx
                                            .link()
                                            .callback(move |_: MouseEvent| Msg::CellClicked(pos));
                                        html! {
                                            <td class={classes!("cell", cell.style)} {onclick}>
                                                { cell.text.clone() }
                                            </td>
                                        }
                                    }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            </div>
        }
    }
}
