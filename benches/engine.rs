use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rookery::{movegen, rules, Board, Coord, Game, GameState};

const BOARDS: [(&'static str, &'static str); 4] = [
    (
        "initial",
        "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR",
    ),
    (
        "middle",
        "r.bqk..r\nppp..ppp\n..np.n..\n..b.p...\n..B.P...\n..NP.N..\nPPP..PPP\nR.BQK..R",
    ),
    (
        "open_position",
        "....r.k.\n...R.ppp\n........\n.....P..\np.......\n......PP\n....pK..\n.rN.B...",
    ),
    (
        "queen",
        "......K.\n........\n........\n.k...q..\n...Q....\n........\n........\n........",
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, diagram)| (name, Board::from_diagram(diagram).unwrap()))
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for (name, board) in boards() {
        let state = GameState::new();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut count = 0_usize;
                for from in Coord::iter() {
                    for to in Coord::iter() {
                        if rules::is_valid_move(&board, &state, from, to) {
                            count += 1;
                        }
                    }
                }
                black_box(count)
            })
        });
    }
}

fn bench_has_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_legal_moves");
    for (name, board) in boards() {
        let state = GameState::new();
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::has_legal_moves(&board, &state, state.turn)))
        });
    }
}

fn bench_playthrough(c: &mut Criterion) {
    // Scholar's mate, replayed from scratch on every iteration.
    let moves: Vec<(Coord, Coord)> = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ]
    .iter()
    .map(|&(from, to)| (from.parse().unwrap(), to.parse().unwrap()))
    .collect();
    c.bench_function("playthrough/scholars_mate", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for &(from, to) in &moves {
                game.attempt_move(from, to).unwrap();
            }
            black_box(game.status())
        })
    });
}

criterion_group!(benches, bench_validate, bench_has_legal_moves, bench_playthrough);
criterion_main!(benches);
