use std::{env, error::Error, time::Instant};

use glam::Vec3;
use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use sparse_octree::{Octree, OctreeConfig};

struct Options {
    config: OctreeConfig,
    count: usize,
    seed: Option<u64>,
    point: Option<Vec3>,
}

fn parse_point(value: &str) -> Result<Vec3, Box<dyn Error>> {
    let coords = value
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()?;
    match coords.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("Expected a point as x,y,z but got '{value}'").into()),
    }
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        config: OctreeConfig::default(),
        count: 100,
        seed: None,
        point: None,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or(format!("Missing value for {arg}"));
        match arg.as_str() {
            "--config" | "-c" => options.config = OctreeConfig::load(value()?)?,
            "--count" | "-n" => options.count = value()?.parse()?,
            "--seed" | "-s" => options.seed = Some(value()?.parse()?),
            "--point" | "-p" => options.point = Some(parse_point(&value()?)?),
            other => return Err(format!("Unknown argument {other}").into()),
        }
    }
    Ok(options)
}

// Fills a new tree with random points on the integer grid inside its bounds
fn random_tree(config: &OctreeConfig, count: usize, rng: &mut StdRng) -> Octree<Vec3> {
    let mut tree = Octree::with_config(config);
    let upper = config.bounding_box_size as u32;
    for _ in 0..count {
        let point = Vec3::new(
            rng.random_range(0..upper) as f32,
            rng.random_range(0..upper) as f32,
            rng.random_range(0..upper) as f32,
        );
        if let Err(err) = tree.add(point) {
            warn!("Skipping random point: {err}");
        }
    }
    tree
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let options = parse_args()?;
    options.config.validate()?;

    if options.count == 0 {
        return Err("Need a positive amount of elements".into());
    }
    if options.config.bounding_box_size <= 1.0 {
        return Err("Bounding box size should be large enough to fit a number of elements".into());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let start = Instant::now();
    let mut tree = random_tree(&options.config, options.count, &mut rng);
    info!(
        "Inserted {} elements in {}ms",
        tree.len(),
        start.elapsed().as_secs_f32() * 1000.0
    );

    if let Some(point) = options.point {
        let node = tree.add(point)?;
        info!("Added {point} to node {node}");
    }

    let occupied = tree.iter_nodes().filter(|(_, n)| n.has_elements()).count();
    info!(
        "Tree holds {} elements in {} nodes ({} occupied), depth {}",
        tree.len(),
        tree.node_count(),
        occupied,
        tree.depth()
    );
    for (id, node) in tree.iter_nodes().filter(|(_, n)| n.elements().len() > 1) {
        info!("Bucket {id}: {node}");
    }

    let probe = options
        .point
        .unwrap_or(Vec3::splat(options.config.bounding_box_size / 2.0));
    match tree.closest(&probe) {
        Some(found) => {
            info!("Closest to {probe}: {found} at distance {}", found.distance(probe));
            let found = *found;
            if tree.remove(&found) {
                info!("Removed {found}, {} elements left", tree.len());
            }
        }
        None => info!("Nothing found along the path of {probe}"),
    }

    tree.remove_all();
    info!("Cleared tree, {} nodes left", tree.node_count());
    Ok(())
}
