//! Console blackjack simulator.

use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{Game, GameState, Hand, HandOutcome, RoundResult, TableOptions};
use clap::Parser;

/// Deals blackjack rounds between fixed-policy players and the dealer.
#[derive(Debug, Parser)]
#[command(name = "bjsim", version, about)]
struct Args {
    /// Seed for the shoe (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Number of player seats.
    #[arg(long, default_value_t = 2)]
    players: u8,
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 1)]
    decks: u8,
    /// Number of rounds to play.
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Players hit below this value.
    #[arg(long, default_value_t = 14)]
    player_hit_below: u16,
    /// Dealer stands on a soft 17.
    #[arg(long)]
    stand_on_soft_17: bool,
    /// Fraction of the shoe dealt before reshuffling between rounds.
    #[arg(long, default_value_t = 0.75)]
    penetration: f64,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> TableOptions {
        TableOptions::default()
            .with_players(self.players)
            .with_decks(self.decks)
            .with_player_hit_below(self.player_hit_below)
            .with_dealer_hits_soft_17(!self.stand_on_soft_17)
            .with_penetration(self.penetration)
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let mut game = Game::new(args.options(), seed);

    println!();
    println!("Blackjack simulator");

    for round in 1..=args.rounds {
        if game.check_and_reshuffle() == Ok(true) {
            println!("Shoe reshuffled.");
        }

        println!();
        if args.rounds > 1 {
            println!("Round {round}");
        }

        if let Err(err) = play_round(&mut game) {
            eprintln!("Round error: {err}");
            break;
        }

        game.clear_round();
    }
}

fn play_round(game: &mut Game) -> Result<(), bjsim::RoundError> {
    println!("Dealing cards");
    game.deal()?;
    print_table(game);

    if game.dealer_hand().is_blackjack() {
        println!("Dealer has Blackjack!");
    }
    for (seat, hand) in game.player_hands().iter().enumerate() {
        if hand.is_blackjack() {
            println!("{} has Blackjack!", seat_name(seat));
        }
    }

    while let Some(seat) = game.current_seat() {
        let already_dealt = game.player_hand(seat).map_or(0, Hand::len);
        if game.player_hand(seat).is_some_and(Hand::is_blackjack) {
            game.play_player(seat)?;
            continue;
        }

        println!();
        println!("{}'s turn", seat_name(seat));
        game.play_player(seat)?;
        if let Some(hand) = game.player_hand(seat) {
            print_turn(&seat_name(seat), hand, already_dealt);
        }
    }

    if game.state() == GameState::DealerTurn {
        println!();
        println!("Dealer's turn");
        let already_dealt = game.dealer_hand().len();
        game.dealer_play()?;
        print_turn("Dealer", game.dealer_hand(), already_dealt);
    }

    let result = game.showdown()?;
    print_results(&result);

    Ok(())
}

fn seat_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

fn print_table(game: &Game) {
    for (seat, hand) in game.player_hands().iter().enumerate() {
        println!("{}: {}", seat_name(seat), format_hand(hand));
    }
    println!("Dealer: {}", format_hand(game.dealer_hand()));
}

fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
    format!("{} ({})", cards.join(", "), hand.evaluate())
}

/// Replays a finished turn hit by hit from the cards dealt after `already_dealt`.
fn print_turn(name: &str, hand: &Hand, already_dealt: usize) {
    let cards = hand.cards();
    for end in already_dealt..cards.len() {
        let before: Hand = cards[..end].iter().copied().collect();
        println!("{name} hits {} and draws the {}", before.value(), cards[end]);
    }

    if hand.is_bust() {
        println!("{name} busts");
    } else {
        println!("{name} stands on {}", hand.value());
    }
}

fn print_results(result: &RoundResult) {
    println!();
    println!("Results");
    for player in &result.players {
        println!("{} {}", seat_name(player.seat), player.outcome);
    }
    println!(
        "{} win(s), {} tie(s), {} loss(es)",
        result.count(HandOutcome::Win),
        result.count(HandOutcome::Tie),
        result.count(HandOutcome::Lose)
    );
    println!();
}
