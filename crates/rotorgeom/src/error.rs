use thiserror::Error;

/// Problems with a part table or with the joint angles handed to it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("hierarchy has no parts")]
    EmptyHierarchy,
    #[error("part {part} has parent {parent}, which does not precede it")]
    ParentOutOfOrder { part: usize, parent: usize },
    #[error("part {part} reads joint angle {index} but only {angle_count} angles exist")]
    AngleIndex {
        part: usize,
        index: usize,
        angle_count: usize,
    },
    #[error("expected {expected} joint angles, got {actual}")]
    AngleCount { expected: usize, actual: usize },
}

/// Problems building a voxel world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("world size along {axis} must be at least 1")]
    EmptyDimension { axis: char },
    #[error("a {x}x{y}x{z} world has too many blocks to store")]
    TooLarge { x: usize, y: usize, z: usize },
}
