//! A small block world with a rising and falling water level
//!
//! The world is a dense grid indexed `[z][y][x]`.
//! Every dirt block is drawn as a unit cube at its grid position,
//! and every air block at the water level gets a water surface
//! just below the middle of its cell.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::WorldError;
use crate::hierarchy::*;
use crate::matrix::Matrix;
use crate::re3::Vector;
use crate::scalar::*;

pub const WATER_TEXTURE: u32 = 0;
pub const DIRT_TEXTURE: u32 = 1;
pub const GROUND_TEXTURE: u32 = 2;
pub const SKY_TEXTURE: u32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Block {
    #[default]
    Air,
    Dirt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    blocks: Vec<Block>,
    /// Height of the water surface, or -1 for no water
    water_level: isize,
}

impl World {
    /// An all-air world with the water surface at height 2
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Result<World, WorldError> {
        for (axis, size) in [('x', size_x), ('y', size_y), ('z', size_z)] {
            if size == 0 {
                return Err(WorldError::EmptyDimension { axis });
            }
        }
        let len = size_x
            .checked_mul(size_y)
            .and_then(|n| n.checked_mul(size_z))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(WorldError::TooLarge {
                x: size_x,
                y: size_y,
                z: size_z,
            })?;
        let mut world = World {
            size_x,
            size_y,
            size_z,
            blocks: vec![Block::Air; len],
            water_level: -1,
        };
        world.set_water_level(2);
        Ok(world)
    }

    /// A world whose columns are filled with dirt up to the given heights
    ///
    /// `height(x, z)` is clamped to the world's Y size.
    pub fn from_heights(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        mut height: impl FnMut(usize, usize) -> usize,
    ) -> Result<World, WorldError> {
        let mut world = World::new(size_x, size_y, size_z)?;
        for z in 0..size_z {
            for x in 0..size_x {
                let h = height(x, z).min(size_y);
                for y in 0..h {
                    world.set_block(x, y, z, Block::Dirt);
                }
            }
        }
        log::debug!("built {size_x}x{size_y}x{size_z} world");
        Ok(world)
    }

    pub fn size(&self) -> [usize; 3] {
        [self.size_x, self.size_y, self.size_z]
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        (x < self.size_x && y < self.size_y && z < self.size_z)
            .then(|| (z * self.size_y + y) * self.size_x + x)
    }

    /// The block at the given cell, or `None` outside the world
    pub fn block(&self, x: usize, y: usize, z: usize) -> Option<Block> {
        self.index(x, y, z).map(|i| self.blocks[i])
    }

    /// Replace a block. Cells outside the world are ignored.
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, block: Block) {
        if let Some(i) = self.index(x, y, z) {
            self.blocks[i] = block;
        }
    }

    pub fn water_level(&self) -> isize {
        self.water_level
    }

    /// Set the water level, clamped to [-1, Y - 1]
    pub fn set_water_level(&mut self, level: isize) {
        let top = self.size_y as isize - 1;
        self.water_level = level.clamp(-1, top);
    }

    pub fn raise_water(&mut self) {
        self.set_water_level(self.water_level + 1);
    }

    pub fn lower_water(&mut self) {
        self.set_water_level(self.water_level - 1);
    }

    /// Where a camera should start: above the middle of the world
    pub fn spawn_position<T: Rational>(&self) -> Vector<T> {
        Vector {
            x: T::from_fraction(self.size_x as isize, 2),
            y: T::from_integer(self.size_y as isize),
            z: T::from_fraction(self.size_z as isize, 2),
        }
    }

    /// Issue the draw calls for every visible block, then the ground slab and the sky box
    pub fn draw<T: Rational>(&self, view: Matrix<T>, target: &mut impl DrawTarget<T>) {
        target.set_view(view);

        let at = |i: usize| T::from_integer(i as isize);
        let water_drop = T::from_fraction(2, 5);
        let mut count = 0;
        for z in 0..self.size_z {
            for y in 0..self.size_y {
                for x in 0..self.size_x {
                    let command = match self.blocks[(z * self.size_y + y) * self.size_x + x] {
                        Block::Dirt => DrawCommand {
                            primitive: Primitive::Cube,
                            model: Matrix::translation(at(x), at(y), at(z)),
                            paint: Paint::Texture(DIRT_TEXTURE),
                        },
                        Block::Air if y as isize == self.water_level => DrawCommand {
                            primitive: Primitive::Plane,
                            model: Matrix::translation(at(x), at(y) - water_drop, at(z)),
                            paint: Paint::Texture(WATER_TEXTURE),
                        },
                        Block::Air => continue,
                    };
                    target.draw(command);
                    count += 1;
                }
            }
        }
        log::trace!("drew {count} blocks");

        let (size_x, size_z) = (at(self.size_x), at(self.size_z));
        let floor = Matrix::translation(T::zero(), -T::one_half(), T::zero());
        target.draw(DrawCommand {
            primitive: Primitive::Cube,
            model: floor * Matrix::scale(size_x, T::from_fraction(1, 20), size_z),
            paint: Paint::Texture(GROUND_TEXTURE),
        });
        target.draw(DrawCommand {
            primitive: Primitive::Cube,
            model: floor * Matrix::scale(size_x, T::from_integer(50), size_z),
            paint: Paint::Texture(SKY_TEXTURE),
        });
    }
}
