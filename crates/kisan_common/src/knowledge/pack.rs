//! Built-in advisory pack.
//!
//! Static, curated guidance for the most common call-desk topics.
//! Authored once, loaded at startup, never mutated. Catalog order is the
//! authoring order below and is part of the contract: tie-breaks in the
//! response engine resolve to the earlier entry.

/// A single static advisory entry.
pub struct CapsuleEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub crop_focus: &'static [&'static str],
    pub body: &'static str,
    pub plan: &'static [&'static str],
    pub seasonal_notes: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub follow_ups: &'static [&'static str],
}

/// Built-in advisory entries, in catalog order.
pub const ADVISORY_PACK: &[CapsuleEntry] = &[
    CapsuleEntry {
        id: "cotton-pest-spray",
        title: "Cotton pest control and spray planning",
        summary: "Sucking pests on cotton show up as curling, yellowing leaves \
                  and sticky honeydew. Confirm the pest before spraying and \
                  start with the softest effective option.",
        crop_focus: &["cotton", "pest", "insects", "spray", "whitefly", "aphids", "curl"],
        body: "Leaf curl with small insects on the underside usually means \
               whitefly, aphids or jassids. Check five plants per acre at the \
               field edge and centre. If more than two adults per leaf, spray \
               neem oil 5 ml per litre in the evening; escalate to \
               flonicamid 0.3 g per litre only if pressure stays high after a \
               week. Avoid repeating the same chemical group in back-to-back \
               sprays.",
        plan: &[
            "Scout five plants each at the field edge and centre; count insects on three leaves per plant.",
            "If counts are low, spray neem oil 5 ml per litre with a sticker in the evening.",
            "If counts stay high after 7 days, switch to flonicamid 0.3 g per litre.",
            "Re-scout after every spray and rotate the chemical group each round.",
        ],
        seasonal_notes: &[
            "Whitefly pressure peaks in warm, dry spells after early rains.",
            "Do not spray before expected rain; the wash-off wastes the round.",
        ],
        tips: &[
            "Yellow sticky traps at 8 per acre give early warning of whitefly build-up.",
            "Spray the underside of leaves; that is where sucking pests sit.",
        ],
        follow_ups: &[
            "Which variety was sown, and how many days since sowing?",
            "Has any spray already been tried this season?",
        ],
    },
    CapsuleEntry {
        id: "sugarcane-drip-schedule",
        title: "Sugarcane drip irrigation scheduling",
        summary: "In peak summer, drip-irrigated sugarcane needs water on \
                  alternate days, with the run time set by dripper discharge \
                  rather than a fixed clock.",
        crop_focus: &["sugarcane", "drip", "irrigation", "water", "summer"],
        body: "For the formative stage in summer, run the drip on alternate \
               days to deliver roughly 25 to 30 cubic metres per acre per \
               week. With 4 litre-per-hour drippers at standard spacing that \
               is about 2 to 2.5 hours per run. In loamy soil, stretch to \
               every third day; in sandy soil, shorten the gap rather than \
               lengthening the run.",
        plan: &[
            "Check dripper discharge with a catch can; calculate run time from litres per hour, not habit.",
            "Run alternate-day cycles of 2 to 2.5 hours during peak summer.",
            "Mulch the row with trash to cut evaporation losses.",
            "Flush the laterals once a fortnight to keep emitters even.",
        ],
        seasonal_notes: &[
            "April to June is the critical formative window; moisture stress here costs tonnage at harvest.",
            "After the monsoon breaks, switch back to need-based irrigation.",
        ],
        tips: &[
            "A soil probe or even a screwdriver test at 15 cm depth beats guessing.",
            "Fertigate urea in small weekly doses through the drip instead of one big broadcast.",
        ],
        follow_ups: &[
            "What is the dripper discharge rating and lateral spacing?",
            "Is the soil sandy, loamy or heavy black cotton soil?",
        ],
    },
    CapsuleEntry {
        id: "tomato-market-linkage",
        title: "Tomato mandi rates and buyer linkage",
        summary: "When local mandi rates fall, compare nearby markets on the \
                  Agmarknet feed, and route graded produce to FPO aggregators \
                  or direct buyers before dumping at the gate price.",
        crop_focus: &["tomato", "mandi", "rates", "buyers", "market", "fpo"],
        body: "Gate prices collapse first; regulated mandis one district away \
               often hold 20 to 30 percent better rates for graded lots. \
               Grading into A and B lots, crating instead of sacking, and \
               pooling through the local FPO opens processor and retail-chain \
               buyers who do not pick up loose field-run produce.",
        plan: &[
            "Check today's rates for the three nearest regulated mandis before committing the lot.",
            "Grade into A and B lots and crate them; mixed sacks price at the bottom grade.",
            "Call the FPO aggregator for pooled pickup and processor rates.",
            "Agree the rate and payment terms in writing before loading.",
        ],
        seasonal_notes: &[
            "Flush-season gluts are worst in the weeks after a holiday demand spike fades.",
            "Evening dispatch reaches the morning auction with less weight loss.",
        ],
        tips: &[
            "A and B grading alone typically lifts realisation by 10 to 15 percent.",
            "Keep crates in shade; heat-soaked tomatoes get rejected at the buyer's dock.",
        ],
        follow_ups: &[
            "What volume is ready now, and what can be held back a week?",
            "Is the farmer a member of an FPO or producer group?",
        ],
    },
    CapsuleEntry {
        id: "soil-organic-carbon",
        title: "Building soil organic carbon before paddy",
        summary: "Raising organic carbon ahead of the paddy season means a \
                  green-manure catch crop, composted farmyard manure, and \
                  keeping residue in the field instead of burning it.",
        crop_focus: &["soil", "organic", "carbon", "paddy", "compost", "manure"],
        body: "Sow dhaincha or sunhemp 45 to 50 days before transplanting and \
               plough it in at flowering; that alone adds 8 to 10 tonnes of \
               green matter per acre. Add 4 to 5 tonnes of well-decomposed \
               farmyard manure or compost at final puddling. Residue \
               incorporation, not burning, is what moves the carbon number \
               year on year.",
        plan: &[
            "Get a soil test so the baseline organic carbon and pH are on record.",
            "Sow dhaincha or sunhemp immediately after the summer harvest.",
            "Plough in the green manure at flowering, 45 to 50 days after sowing.",
            "Apply 4 to 5 tonnes per acre of decomposed farmyard manure at puddling.",
            "Incorporate straw after harvest instead of burning it.",
        ],
        seasonal_notes: &[
            "The green-manure window closes about seven weeks before transplanting; count backwards from the nursery date.",
            "Compost applied in the rain leaches; work it in the same day.",
        ],
        tips: &[
            "One acre of dhaincha fixes roughly 25 kg of nitrogen as a bonus.",
            "Repeat the soil test every two years; carbon moves slowly and the trend is what matters.",
        ],
        follow_ups: &[
            "When is the paddy nursery planned to be sown?",
            "Is a recent soil test report available?",
        ],
    },
    CapsuleEntry {
        id: "wheat-sowing-window",
        title: "Wheat sowing window and seed treatment",
        summary: "Timely wheat sowing closes by late November; every week of \
                  delay past that costs yield, and treated seed at the right \
                  rate is the cheapest insurance the crop gets.",
        crop_focus: &["wheat", "sowing", "seed", "treatment", "rabi"],
        body: "For irrigated timely sowing, aim for the first three weeks of \
               November with 40 kg of seed per acre; after that switch to a \
               late-sown variety and raise the rate to 50 kg. Treat seed with \
               tebuconazole 1 g per kg against loose smut, and sow with a \
               seed drill at 4 to 5 cm depth rather than broadcasting.",
        plan: &[
            "Pick the variety by the calendar: timely-sown types only until late November.",
            "Treat seed with tebuconazole 1 g per kg before sowing.",
            "Drill at 40 kg per acre, 4 to 5 cm deep, with 18 to 20 cm row spacing.",
            "Give the crown-root irrigation at 20 to 25 days after sowing.",
        ],
        seasonal_notes: &[
            "Each week of delay past the window drops yield by roughly 1 quintal per acre.",
            "A warm spell at grain filling hurts late-sown wheat most; do not stretch the calendar.",
        ],
        tips: &[
            "Zero-till drilling into rice stubble saves a tillage pass and sows earlier.",
            "Do not recycle untreated grain as seed more than one season.",
        ],
        follow_ups: &[
            "Which date and variety are planned for sowing?",
            "Is a seed drill available or will the field be broadcast?",
        ],
    },
    CapsuleEntry {
        id: "kharif-weather-watch",
        title: "Kharif monsoon weather watch",
        summary: "Sowing decisions in kharif ride on the monsoon onset; hold \
                  dry sowing until a real onset spell is forecast, and keep a \
                  short-duration fallback variety ready.",
        crop_focus: &["kharif", "monsoon", "weather", "rain", "forecast"],
        body: "A false onset, one good shower followed by a dry fortnight, \
               kills more kharif stands than drought does. Wait for the \
               district forecast to show a wet spell of three or more days \
               with soaking totals before committing seed. If the onset slips \
               past mid-July, shift to a short-duration variety instead of \
               gambling the full-season one.",
        plan: &[
            "Track the five-day district forecast daily once pre-monsoon showers begin.",
            "Sow only when a multi-day wet spell is forecast, not on the first shower.",
            "Keep a short-duration variety reserved as the late-onset fallback.",
            "After sowing, plan a protective irrigation source for any 10-day dry break.",
        ],
        seasonal_notes: &[
            "June onset dates vary by two to three weeks across districts in the same state.",
            "Dry spells in August are common even in good monsoon years; budget for one.",
        ],
        tips: &[
            "District agromet advisories are issued twice a week; they beat generic city forecasts.",
            "Ridge-and-furrow sowing buys several extra days against both waterlogging and drought.",
        ],
        follow_ups: &[
            "Which district is the farm in, and has the onset reached it?",
            "Is any protective irrigation source available for dry breaks?",
        ],
    },
    CapsuleEntry {
        id: "crop-loan-support",
        title: "Crop loan and insurance support",
        summary: "Seasonal credit runs through the Kisan Credit Card at the \
                  local branch, and enrolled crops carry insurance cover; the \
                  cut-off dates matter more than the paperwork.",
        crop_focus: &["loan", "credit", "insurance", "bank", "kcc"],
        body: "A Kisan Credit Card covers seasonal input costs at subsidised \
               interest, with the limit set by the district scale of finance \
               for the crop. Crop insurance enrolment closes before the \
               season's cut-off date, and loss intimation after a damage \
               event must reach the insurer within 72 hours to keep the claim \
               alive.",
        plan: &[
            "Take land records and identity documents to the branch that holds the land's service area.",
            "Apply for a Kisan Credit Card limit matching the district scale of finance.",
            "Confirm the insurance cut-off date for the season and enrol before it.",
            "After any damage event, file the loss intimation within 72 hours.",
        ],
        seasonal_notes: &[
            "Kharif enrolment typically closes in July and rabi in December; the branch has the exact dates.",
            "Claims against mid-season adversity need the intimation on record first.",
        ],
        tips: &[
            "Interest subvention needs timely repayment; rolling over costs the subsidy.",
            "Keep the sown-crop declaration consistent between the bank and the insurer.",
        ],
        follow_ups: &[
            "Does the caller already hold a Kisan Credit Card?",
            "Which crop and season is the cover needed for?",
        ],
    },
    CapsuleEntry {
        id: "onion-storage-care",
        title: "Onion harvest and storage care",
        summary: "Onions keep only if harvested mature, field-cured for three \
                  days, and stored in a ventilated structure; wet or thick-necked \
                  bulbs rot first and take the stack with them.",
        crop_focus: &["onion", "storage", "harvest", "curing", "rot"],
        body: "Harvest when half the tops fall over naturally, then cure in \
               windrows for three days with the bulbs shaded by their own \
               tops. Cull thick-necked, bruised or bolted bulbs; they will \
               not keep. Store in a bottom-ventilated structure at no more \
               than a two-bulb depth on slatted shelves, and inspect \
               fortnightly for sprouting or black mould.",
        plan: &[
            "Stop irrigation 10 to 15 days before harvest.",
            "Harvest at 50 percent top-fall; avoid pulling in wet soil.",
            "Field-cure in windrows for three days, tops covering bulbs.",
            "Cull damaged and thick-necked bulbs before stacking.",
            "Store shallow on slatted, ventilated shelves and inspect fortnightly.",
        ],
        seasonal_notes: &[
            "Rabi onions store for months; kharif onions are for quick sale, not storage.",
            "Humid spells drive black mould; open the vents on dry days.",
        ],
        tips: &[
            "Losses double when bulbs go in wet; never stack before curing is complete.",
            "Grade before storage, not after; handling sprouted stacks spreads rot.",
        ],
        follow_ups: &[
            "Is the lot rabi or kharif harvest?",
            "What storage structure is available at the farm?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_pack_not_empty() {
        assert!(!ADVISORY_PACK.is_empty());
    }

    #[test]
    fn test_ids_unique() {
        let ids: BTreeSet<&str> = ADVISORY_PACK.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), ADVISORY_PACK.len());
    }

    #[test]
    fn test_entries_complete() {
        for entry in ADVISORY_PACK {
            assert!(!entry.title.is_empty(), "{} has empty title", entry.id);
            assert!(!entry.summary.is_empty(), "{} has empty summary", entry.id);
            assert!(!entry.crop_focus.is_empty(), "{} has no crop focus tags", entry.id);
            assert!(!entry.plan.is_empty(), "{} has no plan steps", entry.id);
            assert!(!entry.follow_ups.is_empty(), "{} has no follow-ups", entry.id);
        }
    }

    #[test]
    fn test_tags_lowercase() {
        for entry in ADVISORY_PACK {
            for tag in entry.crop_focus {
                assert_eq!(*tag, tag.to_lowercase(), "tag {} in {} not lowercase", tag, entry.id);
            }
        }
    }
}
