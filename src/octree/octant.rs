/// 3-bit address of one of the eight children of a node.
/// Bit 0 selects the upper x half, bit 1 the upper y half, bit 2 the upper z half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Octant(u8);

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    pub fn from_bits(x: bool, y: bool, z: bool) -> Octant {
        let mut index = 0;
        if x {
            index |= 1;
        }
        if y {
            index |= 2;
        }
        if z {
            index |= 4;
        }
        Octant(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn x(self) -> bool {
        self.0 & 1 != 0
    }

    pub fn y(self) -> bool {
        self.0 & 2 != 0
    }

    pub fn z(self) -> bool {
        self.0 & 4 != 0
    }
}
