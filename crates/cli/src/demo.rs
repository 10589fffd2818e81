//! Demo run: print shape presets, then replay a pointer script against a
//! pick session on the configured board.
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use grid_content::{BoardLoader, ConfigLoader, ShapeCatalog, ShapeLoader};
use grid_core::{
    AreaFilter, AreaPickData, Board, Coordinate, DenseGrid, GridConfig, PickEvent, PointerEvent,
    ShapeSpec,
};

use crate::config::CliConfig;
use crate::render::{render_area, render_board};
use crate::script::parse_script;

/// One preset per shape family, used when no shape file is configured.
pub fn builtin_shapes() -> ShapeCatalog {
    let right = Coordinate::new(1, 0);
    let mut catalog = ShapeCatalog::new();
    catalog.insert("point", ShapeSpec::Point);
    catalog.insert("square", ShapeSpec::Square { range: 1, inner_cut: 0 });
    catalog.insert("diamond", ShapeSpec::Diamond { range: 2, inner_cut: 0 });
    catalog.insert(
        "half_square",
        ShapeSpec::HalfSquare {
            range: 2,
            direction: right,
            inner_cut: 0,
        },
    );
    catalog.insert(
        "cone",
        ShapeSpec::Cone {
            range: 3,
            direction: right,
            inner_cut: 0,
        },
    );
    catalog.insert(
        "drill",
        ShapeSpec::Drill {
            range: 3,
            direction: right,
            inner_cut: 0,
        },
    );
    catalog.insert(
        "x",
        ShapeSpec::X {
            range: 2,
            thickness: 1,
            inner_cut: 0,
        },
    );
    catalog.insert(
        "line",
        ShapeSpec::Line {
            range: 3,
            direction: right,
            thickness: 2,
            inner_cut: 0,
        },
    );
    catalog.insert("circle", ShapeSpec::Circle { range: 3, inner_cut: 0 });
    catalog.insert(
        "plus_sign",
        ShapeSpec::PlusSign {
            range: 3,
            thickness: 2,
            inner_cut: 1,
        },
    );
    catalog
}

pub fn run(config: &CliConfig) -> Result<()> {
    let grid_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GridConfig::default(),
    };
    let catalog = match &config.shapes_path {
        Some(path) => ShapeLoader::load(path)?,
        None => builtin_shapes(),
    };

    for (name, spec) in catalog.iter() {
        let area = spec.build();
        println!("{name} ({spec}, {} cells)", area.len());
        println!("{}", render_area(&area));
    }

    let grid = match &config.board_path {
        Some(path) => BoardLoader::load::<DenseGrid>(path)?,
        None => DenseGrid::new(&grid_config),
    };
    let steps = parse_script(&config.pick_script)?;
    let pick_area = catalog
        .area(&config.pick_shape)
        .ok_or_else(|| anyhow::anyhow!("Unknown pick shape `{}`", config.pick_shape))?;

    let mut board = Board::new(grid);
    board.on_pointer(|event, coordinate, tile| {
        if event == PointerEvent::Click {
            tracing::info!(%coordinate, pieces = tile.pieces().len(), "tile clicked");
        }
    });

    let picked: Rc<RefCell<Option<PickEvent>>> = Rc::default();
    let sink = Rc::clone(&picked);
    let data = AreaPickData::new(pick_area).with_filter(AreaFilter(config.pick_filter));
    board.begin_pick_session(data, move |event: &PickEvent| {
        *sink.borrow_mut() = Some(event.clone())
    })?;

    for (event, coordinate) in steps {
        board.pointer(event, coordinate);
        tracing::debug!(%event, %coordinate, "replayed pointer step");
    }

    println!("{}", render_board(board.grid()));
    match picked.borrow().as_ref() {
        Some(event) => {
            let tiles: Vec<String> = event.tiles.iter().map(ToString::to_string).collect();
            println!("picked at {}: {}", event.origin, tiles.join(" "));
        }
        None => println!("no tile picked"),
    }

    board.stop_selecting();
    Ok(())
}
