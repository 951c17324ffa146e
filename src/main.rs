use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use weapon_shop::scene::SceneTemplate;
use weapon_shop::shop::{TradeInValuator, WeaponShop};
use weapon_shop::store::{Armory, JsonViewpointStore, MemoryViewpointStore, Treasury, ViewpointStore};
use weapon_shop::world::ShopWorld;
use weapon_shop::{ShopConfig, ShopError, Viewpoint};

fn run() -> Result<(), ShopError> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "shop.toml".to_string());
    let config = ShopConfig::load(Path::new(&config_path))?;
    let world = ShopWorld::load(&config.data_dir)?;

    let viewpoints: Arc<dyn ViewpointStore> = match &config.viewpoint_dir {
        Some(dir) => Arc::new(JsonViewpointStore::new(dir)?),
        None => Arc::new(MemoryViewpointStore::new()),
    };

    let armory = Arc::new(Armory::new(world.weapons.clone()));
    let treasury = Arc::new(Treasury::new());

    for (character, record) in &world.characters {
        treasury.set_gold(character.id, record.gold);
        if let Some(weapon_id) = &record.weapon {
            armory.equip(character.id, weapon_id);
        }
    }

    let shop = WeaponShop::new(
        armory,
        treasury,
        world.scenes.clone(),
        viewpoints,
        TradeInValuator::new(config.trade_in_percent),
        &config.merchant_name,
    );

    let shop_scenes = world.scenes.with_template(SceneTemplate::WeaponShop);
    if shop_scenes.is_empty() {
        warn!("No weapon shop scene found in {:?}", config.data_dir);
        return Ok(());
    }

    for scene in shop_scenes {
        for (character, _) in &world.characters {
            let mut viewpoint = Viewpoint::from_scene(scene, character.id);
            shop.render_shop_screen(character, scene, &mut viewpoint)?;
            info!(
                "Viewpoint of {} for {}:\n{}",
                scene.id,
                character.name,
                serde_json::to_string_pretty(&viewpoint)?
            );
        }
    }

    Ok(())
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weapon_shop=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run() {
        if e.is_configuration() {
            error!("Scene graph is misconfigured: {}", e);
        } else {
            error!("Weapon shop failed: {}", e);
        }
        std::process::exit(1);
    }
}
