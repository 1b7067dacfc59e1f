//! Balanced real-world reactions.
//!
//! Level pools for the game live in [`crate::game::Level`]; the Molecules
//! screen uses [`ReactionId::MOLECULES_SCREEN`].

use super::Blueprint;
use crate::{Fixed, Reaction};

/// Every balanced reaction in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReactionId {
    /// 2H2 + O2 -> 2H2O
    MakeWater,
    /// H2 + F2 -> 2HF
    MakeHydrogenFluoride,
    /// H2 + Cl2 -> 2HCl
    MakeHydrogenChloride,
    /// CO + 2H2 -> CH3OH
    MethanolFromCarbonMonoxide,
    /// CH2O + H2 -> CH3OH
    MethanolFromFormaldehyde,
    /// C2H4 + H2 -> C2H6
    HydrogenateEthylene,
    /// C2H2 + 2H2 -> C2H6
    HydrogenateAcetylene,
    /// C + O2 -> CO2
    BurnCarbon,
    /// 2C + O2 -> 2CO
    PartiallyBurnCarbon,
    /// 2CO + O2 -> 2CO2
    BurnCarbonMonoxide,
    /// C + CO2 -> 2CO
    ReduceCarbonDioxide,
    /// C + 2S -> CS2
    MakeCarbonDisulfide,
    /// N2 + 3H2 -> 2NH3
    MakeAmmonia,
    /// N2 + O2 -> 2NO
    MakeNitricOxide,
    /// 2NO + O2 -> 2NO2
    MakeNitrogenDioxide,
    /// 2N2 + O2 -> 2N2O
    MakeNitrousOxide,
    /// P4 + 6H2 -> 4PH3
    MakePhosphine,
    /// P4 + 6F2 -> 4PF3
    MakePhosphorusTrifluoride,
    /// P4 + 6Cl2 -> 4PCl3
    MakePhosphorusTrichloride,
    /// P4 + 10Cl2 -> 4PCl5
    ///
    /// The Cl2 coefficient exceeds the quantity range, so no game pool uses it.
    ChlorinatePhosphorus,
    /// PCl3 + Cl2 -> PCl5
    MakePhosphorusPentachloride,
    /// 2SO2 + O2 -> 2SO3
    MakeSulfurTrioxide,
    /// 2C + 2H2O -> CH4 + CO2
    CarbonAndSteam,
    /// CH4 + H2O -> 3H2 + CO
    ReformMethane,
    /// CH4 + 2O2 -> CO2 + 2H2O
    CombustMethane,
    /// 2C2H6 + 7O2 -> 4CO2 + 6H2O
    CombustEthane,
    /// C2H4 + 3O2 -> 2CO2 + 2H2O
    CombustEthylene,
    /// 2C2H2 + 5O2 -> 4CO2 + 2H2O
    CombustAcetylene,
    /// C2H5OH + 3O2 -> 2CO2 + 3H2O
    CombustEthanol,
    /// C2H6 + Cl2 -> C2H5Cl + HCl
    ChlorinateEthane,
    /// CH4 + 4S -> CS2 + 2H2S
    MethaneAndSulfur,
    /// CS2 + 3O2 -> CO2 + 2SO2
    BurnCarbonDisulfide,
    /// 4NH3 + 3O2 -> 2N2 + 6H2O
    OxidizeAmmoniaToNitrogen,
    /// 4NH3 + 5O2 -> 4NO + 6H2O
    OxidizeAmmoniaToNitricOxide,
    /// 4NH3 + 7O2 -> 4NO2 + 6H2O
    OxidizeAmmoniaToNitrogenDioxide,
    /// 4NH3 + 6NO -> 5N2 + 6H2O
    ReduceNitricOxide,
    /// SO2 + 2H2 -> S + 2H2O
    SulfurFromSulfurDioxide,
    /// SO2 + 3H2 -> H2S + 2H2O
    HydrogenSulfideFromSulfurDioxide,
    /// 2F2 + H2O -> OF2 + 2HF
    MakeOxygenDifluoride,
    /// OF2 + H2O -> O2 + 2HF
    HydrolyzeOxygenDifluoride,
    /// C10H14 + C2H3ClO -> C12H16O + HCl
    AcylateIsobutylbenzene,
    /// C6H6 + C4H7ClO -> C10H12O + HCl
    AcylateBenzene,
}

impl ReactionId {
    /// All reactions, in catalog order.
    pub const ALL: [ReactionId; 42] = [
        ReactionId::MakeWater,
        ReactionId::MakeHydrogenFluoride,
        ReactionId::MakeHydrogenChloride,
        ReactionId::MethanolFromCarbonMonoxide,
        ReactionId::MethanolFromFormaldehyde,
        ReactionId::HydrogenateEthylene,
        ReactionId::HydrogenateAcetylene,
        ReactionId::BurnCarbon,
        ReactionId::PartiallyBurnCarbon,
        ReactionId::BurnCarbonMonoxide,
        ReactionId::ReduceCarbonDioxide,
        ReactionId::MakeCarbonDisulfide,
        ReactionId::MakeAmmonia,
        ReactionId::MakeNitricOxide,
        ReactionId::MakeNitrogenDioxide,
        ReactionId::MakeNitrousOxide,
        ReactionId::MakePhosphine,
        ReactionId::MakePhosphorusTrifluoride,
        ReactionId::MakePhosphorusTrichloride,
        ReactionId::ChlorinatePhosphorus,
        ReactionId::MakePhosphorusPentachloride,
        ReactionId::MakeSulfurTrioxide,
        ReactionId::CarbonAndSteam,
        ReactionId::ReformMethane,
        ReactionId::CombustMethane,
        ReactionId::CombustEthane,
        ReactionId::CombustEthylene,
        ReactionId::CombustAcetylene,
        ReactionId::CombustEthanol,
        ReactionId::ChlorinateEthane,
        ReactionId::MethaneAndSulfur,
        ReactionId::BurnCarbonDisulfide,
        ReactionId::OxidizeAmmoniaToNitrogen,
        ReactionId::OxidizeAmmoniaToNitricOxide,
        ReactionId::OxidizeAmmoniaToNitrogenDioxide,
        ReactionId::ReduceNitricOxide,
        ReactionId::SulfurFromSulfurDioxide,
        ReactionId::HydrogenSulfideFromSulfurDioxide,
        ReactionId::MakeOxygenDifluoride,
        ReactionId::HydrolyzeOxygenDifluoride,
        ReactionId::AcylateIsobutylbenzene,
        ReactionId::AcylateBenzene,
    ];

    /// Reactions offered on the Molecules screen.
    pub const MOLECULES_SCREEN: [ReactionId; 3] = [
        ReactionId::CombustMethane,
        ReactionId::AcylateIsobutylbenzene,
        ReactionId::AcylateBenzene,
    ];

    /// Static description of this reaction.
    pub fn blueprint(self) -> Blueprint {
        use ReactionId::*;
        match self {
            MakeWater => Blueprint {
                name: "Make Water",
                reactants: &[(2, "H2"), (1, "O2")],
                products: &[(2, "H2O")],
            },
            MakeHydrogenFluoride => Blueprint {
                name: "Make Hydrogen Fluoride",
                reactants: &[(1, "H2"), (1, "F2")],
                products: &[(2, "HF")],
            },
            MakeHydrogenChloride => Blueprint {
                name: "Make Hydrogen Chloride",
                reactants: &[(1, "H2"), (1, "Cl2")],
                products: &[(2, "HCl")],
            },
            MethanolFromCarbonMonoxide => Blueprint {
                name: "Methanol from Carbon Monoxide",
                reactants: &[(1, "CO"), (2, "H2")],
                products: &[(1, "CH3OH")],
            },
            MethanolFromFormaldehyde => Blueprint {
                name: "Methanol from Formaldehyde",
                reactants: &[(1, "CH2O"), (1, "H2")],
                products: &[(1, "CH3OH")],
            },
            HydrogenateEthylene => Blueprint {
                name: "Hydrogenate Ethylene",
                reactants: &[(1, "C2H4"), (1, "H2")],
                products: &[(1, "C2H6")],
            },
            HydrogenateAcetylene => Blueprint {
                name: "Hydrogenate Acetylene",
                reactants: &[(1, "C2H2"), (2, "H2")],
                products: &[(1, "C2H6")],
            },
            BurnCarbon => Blueprint {
                name: "Burn Carbon",
                reactants: &[(1, "C"), (1, "O2")],
                products: &[(1, "CO2")],
            },
            PartiallyBurnCarbon => Blueprint {
                name: "Partially Burn Carbon",
                reactants: &[(2, "C"), (1, "O2")],
                products: &[(2, "CO")],
            },
            BurnCarbonMonoxide => Blueprint {
                name: "Burn Carbon Monoxide",
                reactants: &[(2, "CO"), (1, "O2")],
                products: &[(2, "CO2")],
            },
            ReduceCarbonDioxide => Blueprint {
                name: "Reduce Carbon Dioxide",
                reactants: &[(1, "C"), (1, "CO2")],
                products: &[(2, "CO")],
            },
            MakeCarbonDisulfide => Blueprint {
                name: "Make Carbon Disulfide",
                reactants: &[(1, "C"), (2, "S")],
                products: &[(1, "CS2")],
            },
            MakeAmmonia => Blueprint {
                name: "Make Ammonia",
                reactants: &[(1, "N2"), (3, "H2")],
                products: &[(2, "NH3")],
            },
            MakeNitricOxide => Blueprint {
                name: "Make Nitric Oxide",
                reactants: &[(1, "N2"), (1, "O2")],
                products: &[(2, "NO")],
            },
            MakeNitrogenDioxide => Blueprint {
                name: "Make Nitrogen Dioxide",
                reactants: &[(2, "NO"), (1, "O2")],
                products: &[(2, "NO2")],
            },
            MakeNitrousOxide => Blueprint {
                name: "Make Nitrous Oxide",
                reactants: &[(2, "N2"), (1, "O2")],
                products: &[(2, "N2O")],
            },
            MakePhosphine => Blueprint {
                name: "Make Phosphine",
                reactants: &[(1, "P4"), (6, "H2")],
                products: &[(4, "PH3")],
            },
            MakePhosphorusTrifluoride => Blueprint {
                name: "Make Phosphorus Trifluoride",
                reactants: &[(1, "P4"), (6, "F2")],
                products: &[(4, "PF3")],
            },
            MakePhosphorusTrichloride => Blueprint {
                name: "Make Phosphorus Trichloride",
                reactants: &[(1, "P4"), (6, "Cl2")],
                products: &[(4, "PCl3")],
            },
            ChlorinatePhosphorus => Blueprint {
                name: "Chlorinate Phosphorus",
                reactants: &[(1, "P4"), (10, "Cl2")],
                products: &[(4, "PCl5")],
            },
            MakePhosphorusPentachloride => Blueprint {
                name: "Make Phosphorus Pentachloride",
                reactants: &[(1, "PCl3"), (1, "Cl2")],
                products: &[(1, "PCl5")],
            },
            MakeSulfurTrioxide => Blueprint {
                name: "Make Sulfur Trioxide",
                reactants: &[(2, "SO2"), (1, "O2")],
                products: &[(2, "SO3")],
            },
            CarbonAndSteam => Blueprint {
                name: "Carbon and Steam",
                reactants: &[(2, "C"), (2, "H2O")],
                products: &[(1, "CH4"), (1, "CO2")],
            },
            ReformMethane => Blueprint {
                name: "Reform Methane",
                reactants: &[(1, "CH4"), (1, "H2O")],
                products: &[(3, "H2"), (1, "CO")],
            },
            CombustMethane => Blueprint {
                name: "Combust Methane",
                reactants: &[(1, "CH4"), (2, "O2")],
                products: &[(1, "CO2"), (2, "H2O")],
            },
            CombustEthane => Blueprint {
                name: "Combust Ethane",
                reactants: &[(2, "C2H6"), (7, "O2")],
                products: &[(4, "CO2"), (6, "H2O")],
            },
            CombustEthylene => Blueprint {
                name: "Combust Ethylene",
                reactants: &[(1, "C2H4"), (3, "O2")],
                products: &[(2, "CO2"), (2, "H2O")],
            },
            CombustAcetylene => Blueprint {
                name: "Combust Acetylene",
                reactants: &[(2, "C2H2"), (5, "O2")],
                products: &[(4, "CO2"), (2, "H2O")],
            },
            CombustEthanol => Blueprint {
                name: "Combust Ethanol",
                reactants: &[(1, "C2H5OH"), (3, "O2")],
                products: &[(2, "CO2"), (3, "H2O")],
            },
            ChlorinateEthane => Blueprint {
                name: "Chlorinate Ethane",
                reactants: &[(1, "C2H6"), (1, "Cl2")],
                products: &[(1, "C2H5Cl"), (1, "HCl")],
            },
            MethaneAndSulfur => Blueprint {
                name: "Methane and Sulfur",
                reactants: &[(1, "CH4"), (4, "S")],
                products: &[(1, "CS2"), (2, "H2S")],
            },
            BurnCarbonDisulfide => Blueprint {
                name: "Burn Carbon Disulfide",
                reactants: &[(1, "CS2"), (3, "O2")],
                products: &[(1, "CO2"), (2, "SO2")],
            },
            OxidizeAmmoniaToNitrogen => Blueprint {
                name: "Oxidize Ammonia to Nitrogen",
                reactants: &[(4, "NH3"), (3, "O2")],
                products: &[(2, "N2"), (6, "H2O")],
            },
            OxidizeAmmoniaToNitricOxide => Blueprint {
                name: "Oxidize Ammonia to Nitric Oxide",
                reactants: &[(4, "NH3"), (5, "O2")],
                products: &[(4, "NO"), (6, "H2O")],
            },
            OxidizeAmmoniaToNitrogenDioxide => Blueprint {
                name: "Oxidize Ammonia to Nitrogen Dioxide",
                reactants: &[(4, "NH3"), (7, "O2")],
                products: &[(4, "NO2"), (6, "H2O")],
            },
            ReduceNitricOxide => Blueprint {
                name: "Reduce Nitric Oxide",
                reactants: &[(4, "NH3"), (6, "NO")],
                products: &[(5, "N2"), (6, "H2O")],
            },
            SulfurFromSulfurDioxide => Blueprint {
                name: "Sulfur from Sulfur Dioxide",
                reactants: &[(1, "SO2"), (2, "H2")],
                products: &[(1, "S"), (2, "H2O")],
            },
            HydrogenSulfideFromSulfurDioxide => Blueprint {
                name: "Hydrogen Sulfide from Sulfur Dioxide",
                reactants: &[(1, "SO2"), (3, "H2")],
                products: &[(1, "H2S"), (2, "H2O")],
            },
            MakeOxygenDifluoride => Blueprint {
                name: "Make Oxygen Difluoride",
                reactants: &[(2, "F2"), (1, "H2O")],
                products: &[(1, "OF2"), (2, "HF")],
            },
            HydrolyzeOxygenDifluoride => Blueprint {
                name: "Hydrolyze Oxygen Difluoride",
                reactants: &[(1, "OF2"), (1, "H2O")],
                products: &[(1, "O2"), (2, "HF")],
            },
            AcylateIsobutylbenzene => Blueprint {
                name: "Acylate Isobutylbenzene",
                reactants: &[(1, "C10H14"), (1, "C2H3ClO")],
                products: &[(1, "C12H16O"), (1, "HCl")],
            },
            AcylateBenzene => Blueprint {
                name: "Acylate Benzene",
                reactants: &[(1, "C6H6"), (1, "C4H7ClO")],
                products: &[(1, "C10H12O"), (1, "HCl")],
            },
        }
    }

    /// Builds a fresh reaction with all quantities at zero.
    pub fn reaction(self) -> Reaction<Fixed> {
        self.blueprint().build()
    }
}
