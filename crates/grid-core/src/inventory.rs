//! 星石庫存模型

use serde::{Deserialize, Serialize};

use crate::{GridError, GEM_KIND_COUNT};

/// 星石庫存
///
/// 每個種類保存一串個別單位，每個單位帶有自己的副節點加成值；
/// 串列長度即該種類的持有數量。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct GemInventory {
    units: [Vec<u32>; GEM_KIND_COUNT],
}

impl GemInventory {
    /// 創建空庫存
    pub fn empty() -> Self {
        Self {
            units: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// 從每種類的加成值串列建立庫存（外層長度必須為種類數）
    pub fn from_units(units: Vec<Vec<u32>>) -> crate::Result<Self> {
        let len = units.len();
        let units: [Vec<u32>; GEM_KIND_COUNT] = units.try_into().map_err(|_| {
            GridError::InvalidInventory(format!(
                "需要 {} 種星石，實際為 {}",
                GEM_KIND_COUNT, len
            ))
        })?;
        Ok(Self { units })
    }

    /// 建構器模式：設置某種類的單位
    pub fn with_units(mut self, kind: usize, units: Vec<u32>) -> crate::Result<Self> {
        self.set_units(kind, units)?;
        Ok(self)
    }

    /// 設置某種類的單位
    pub fn set_units(&mut self, kind: usize, units: Vec<u32>) -> crate::Result<()> {
        let slot = self.units.get_mut(kind).ok_or_else(|| {
            GridError::InvalidInventory(format!("未定義的星石種類: {}", kind))
        })?;
        *slot = units;
        Ok(())
    }

    /// 某種類的單位加成值
    pub fn units(&self, kind: usize) -> &[u32] {
        self.units.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 每種類的可用數量
    pub fn availability(&self) -> [usize; GEM_KIND_COUNT] {
        std::array::from_fn(|kind| self.units[kind].len())
    }

    /// 總單位數
    pub fn total_units(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    /// 每種類按加成值降序排列後的副本
    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        for units in sorted.units.iter_mut() {
            units.sort_unstable_by(|a, b| b.cmp(a));
        }
        sorted
    }

    /// 每種類的加成前綴和
    ///
    /// `sums[kind][n]` 為該種類加成最高的 n 個單位之和，`sums[kind][0] == 0`。
    /// 以 u64 累加，任意 u32 加成都不會溢位。
    pub fn bonus_prefix_sums(&self) -> [Vec<u64>; GEM_KIND_COUNT] {
        let sorted = self.sorted();
        std::array::from_fn(|kind| {
            let mut sums = Vec::with_capacity(sorted.units[kind].len() + 1);
            let mut running = 0u64;
            sums.push(running);
            for &bonus in &sorted.units[kind] {
                running += u64::from(bonus);
                sums.push(running);
            }
            sums
        })
    }

    /// 檢查每種類的使用量是否都在庫存內
    pub fn fits<T: Copy + Into<u32>>(&self, usage: &[T; GEM_KIND_COUNT]) -> bool {
        usage
            .iter()
            .zip(self.units.iter())
            .all(|(&used, units)| used.into() as usize <= units.len())
    }
}

impl Default for GemInventory {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Vec<u32>>> for GemInventory {
    type Error = GridError;

    fn try_from(units: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_units(units)
    }
}

impl From<GemInventory> for Vec<Vec<u32>> {
    fn from(inventory: GemInventory) -> Self {
        inventory.units.into_iter().collect()
    }
}
