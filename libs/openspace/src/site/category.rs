//! Zoning and building-use tables.
//!
//! Labels follow the Korean Building Act; English snake_case names are
//! accepted as well so site files can be written without Hangul. Both
//! forms deserialize; serialization always writes the snake_case name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpenspaceError;

/// Zoning district the lot lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DistrictUse {
    /// 전용주거지역
    ExclusiveResidential,
    /// 일반주거지역
    GeneralResidential,
    /// 준주거지역
    QuasiResidential,
    /// 상업지역
    Commercial,
    /// 일반공업지역
    GeneralIndustrial,
    /// 준공업지역
    QuasiIndustrial,
    /// 녹지지역
    Green,
}

impl DistrictUse {
    /// Every district, in table order.
    pub const ALL: [DistrictUse; 7] = [
        DistrictUse::ExclusiveResidential,
        DistrictUse::GeneralResidential,
        DistrictUse::QuasiResidential,
        DistrictUse::Commercial,
        DistrictUse::GeneralIndustrial,
        DistrictUse::QuasiIndustrial,
        DistrictUse::Green,
    ];

    /// Legal label of the district.
    pub fn label(self) -> &'static str {
        match self {
            DistrictUse::ExclusiveResidential => "전용주거지역",
            DistrictUse::GeneralResidential => "일반주거지역",
            DistrictUse::QuasiResidential => "준주거지역",
            DistrictUse::Commercial => "상업지역",
            DistrictUse::GeneralIndustrial => "일반공업지역",
            DistrictUse::QuasiIndustrial => "준공업지역",
            DistrictUse::Green => "녹지지역",
        }
    }

    fn name(self) -> &'static str {
        match self {
            DistrictUse::ExclusiveResidential => "exclusive_residential",
            DistrictUse::GeneralResidential => "general_residential",
            DistrictUse::QuasiResidential => "quasi_residential",
            DistrictUse::Commercial => "commercial",
            DistrictUse::GeneralIndustrial => "general_industrial",
            DistrictUse::QuasiIndustrial => "quasi_industrial",
            DistrictUse::Green => "green",
        }
    }

    /// Returns true when lots in this district owe public open space.
    pub fn requires_openspace(self) -> bool {
        matches!(
            self,
            DistrictUse::GeneralResidential
                | DistrictUse::QuasiResidential
                | DistrictUse::Commercial
                | DistrictUse::QuasiIndustrial
        )
    }
}

impl FromStr for DistrictUse {
    type Err = OpenspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.name() == s)
            .ok_or_else(|| OpenspaceError::UnknownCategory {
                kind: "district use",
                label: s.to_string(),
            })
    }
}

impl TryFrom<String> for DistrictUse {
    type Error = OpenspaceError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl fmt::Display for DistrictUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Principal use of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum BuildingUse {
    /// 문화시설
    Cultural,
    /// 집회시설
    Assembly,
    /// 종교시설
    Religious,
    /// 판매시설
    Retail,
    /// 운수시설
    Transportation,
    /// 업무시설
    Office,
    /// 숙박시설
    Lodging,
    /// 공동주택
    Residential,
    /// 의료시설
    Medical,
    /// 교육연구시설
    Education,
    /// 공장
    Factory,
}

impl BuildingUse {
    /// Every building use, in table order.
    pub const ALL: [BuildingUse; 11] = [
        BuildingUse::Cultural,
        BuildingUse::Assembly,
        BuildingUse::Religious,
        BuildingUse::Retail,
        BuildingUse::Transportation,
        BuildingUse::Office,
        BuildingUse::Lodging,
        BuildingUse::Residential,
        BuildingUse::Medical,
        BuildingUse::Education,
        BuildingUse::Factory,
    ];

    /// Legal label of the use.
    pub fn label(self) -> &'static str {
        match self {
            BuildingUse::Cultural => "문화시설",
            BuildingUse::Assembly => "집회시설",
            BuildingUse::Religious => "종교시설",
            BuildingUse::Retail => "판매시설",
            BuildingUse::Transportation => "운수시설",
            BuildingUse::Office => "업무시설",
            BuildingUse::Lodging => "숙박시설",
            BuildingUse::Residential => "공동주택",
            BuildingUse::Medical => "의료시설",
            BuildingUse::Education => "교육연구시설",
            BuildingUse::Factory => "공장",
        }
    }

    fn name(self) -> &'static str {
        match self {
            BuildingUse::Cultural => "cultural",
            BuildingUse::Assembly => "assembly",
            BuildingUse::Religious => "religious",
            BuildingUse::Retail => "retail",
            BuildingUse::Transportation => "transportation",
            BuildingUse::Office => "office",
            BuildingUse::Lodging => "lodging",
            BuildingUse::Residential => "residential",
            BuildingUse::Medical => "medical",
            BuildingUse::Education => "education",
            BuildingUse::Factory => "factory",
        }
    }

    /// Returns true when buildings of this use owe public open space.
    pub fn requires_openspace(self) -> bool {
        matches!(
            self,
            BuildingUse::Cultural
                | BuildingUse::Assembly
                | BuildingUse::Religious
                | BuildingUse::Retail
                | BuildingUse::Transportation
                | BuildingUse::Office
                | BuildingUse::Lodging
        )
    }
}

impl FromStr for BuildingUse {
    type Err = OpenspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.label() == s || u.name() == s)
            .ok_or_else(|| OpenspaceError::UnknownCategory {
                kind: "building use",
                label: s.to_string(),
            })
    }
}

impl TryFrom<String> for BuildingUse {
    type Error = OpenspaceError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl fmt::Display for BuildingUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
