//! Built-in block types and block-data subtypes

use lodestone_core::{
    BlockId, BlockType, Color, Component, Compass, DataTypeId, Delay, Facing, SlabPosition,
    SlabTexture, TorchFacing,
};

use crate::{ComponentSet, DataTypeDef};

pub const STONE: BlockType = BlockType::new(1, "stone", DataTypeId::PLAIN);
pub const WOOL: BlockType = BlockType::new(35, "wool", DataTypeId::WOOL);
pub const STONE_SLAB: BlockType = BlockType::new(44, "stone_slab", DataTypeId::SLAB);
pub const TORCH: BlockType = BlockType::new(50, "torch", DataTypeId::TORCH);
pub const CHEST: BlockType = BlockType::new(54, "chest", DataTypeId::CONTAINER);
pub const FURNACE: BlockType = BlockType::new(61, "furnace", DataTypeId::CONTAINER);
pub const SIGN_POST: BlockType = BlockType::new(63, "sign_post", DataTypeId::SIGN);
pub const PUMPKIN: BlockType = BlockType::new(86, "pumpkin", DataTypeId::DIRECTIONAL);
pub const REPEATER: BlockType = BlockType::new(93, "repeater", DataTypeId::REPEATER);
pub const BEACON: BlockType = BlockType::new(138, "beacon", DataTypeId::PLAIN);

/// Every built-in block type, in id order
pub const BLOCK_TYPES: [BlockType; 10] = [
    STONE, WOOL, STONE_SLAB, TORCH, CHEST, FURNACE, SIGN_POST, PUMPKIN, REPEATER, BEACON,
];

pub fn by_id(id: BlockId) -> Option<BlockType> {
    BLOCK_TYPES.iter().copied().find(|t| t.id == id)
}

pub fn by_name(name: &str) -> Option<BlockType> {
    BLOCK_TYPES.iter().copied().find(|t| t.name == name)
}

fn plain_defaults() -> ComponentSet {
    ComponentSet::new()
}

fn wool_defaults() -> ComponentSet {
    ComponentSet::of([Color::White])
}

fn repeater_defaults() -> ComponentSet {
    ComponentSet::of([Component::from(Facing::North), Component::from(Delay::Ticks1)])
}

fn torch_defaults() -> ComponentSet {
    ComponentSet::of([TorchFacing::Up])
}

fn slab_defaults() -> ComponentSet {
    ComponentSet::of([
        Component::from(SlabPosition::Down),
        Component::from(SlabTexture::Stone),
    ])
}

fn sign_defaults() -> ComponentSet {
    ComponentSet::of([Compass::North])
}

fn facing_defaults() -> ComponentSet {
    ComponentSet::of([Facing::North])
}

/// Construction contracts installed into every registry built with
/// `install_builtins`
pub fn builtin_data_types() -> [DataTypeDef; 8] {
    [
        DataTypeDef::new(DataTypeId::PLAIN, plain_defaults),
        DataTypeDef::new(DataTypeId::WOOL, wool_defaults),
        DataTypeDef::new(DataTypeId::REPEATER, repeater_defaults),
        DataTypeDef::new(DataTypeId::TORCH, torch_defaults),
        DataTypeDef::new(DataTypeId::SLAB, slab_defaults),
        DataTypeDef::new(DataTypeId::SIGN, sign_defaults),
        DataTypeDef::new(DataTypeId::DIRECTIONAL, facing_defaults),
        DataTypeDef::new(DataTypeId::CONTAINER, facing_defaults),
    ]
}
