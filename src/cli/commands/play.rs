//! Play command - interactive game between two agents

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{AgentKind, build_agent},
    board::Player,
    cli::output,
    session::{Session, SessionState},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Agent controlling X
    #[arg(long, value_enum, default_value_t = AgentKind::Human)]
    pub x: AgentKind,

    /// Agent controlling O
    #[arg(long, value_enum, default_value_t = AgentKind::Engine)]
    pub o: AgentKind,

    /// Random seed for engine/random agents
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let x = build_agent(args.x, Player::X, args.seed);
    let o = build_agent(args.o, Player::O, args.seed.map(|seed| seed.wrapping_add(1)));
    let mut session = Session::new(x, o);

    println!("{}", output::render_positions());

    loop {
        match session.state() {
            SessionState::ToMove(_) => {
                let turn = session.step()?;
                println!("{} makes a move to square {}", turn.player, turn.position);
                println!("{}\n", output::render_board(&session.board()));
            }
            SessionState::Won(player) => {
                println!("{player} wins!");
                return Ok(());
            }
            SessionState::Draw => {
                println!("It's a tie!");
                return Ok(());
            }
        }
    }
}
